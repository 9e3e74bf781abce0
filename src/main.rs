use clap::Parser;
use serde::Serialize;
use std::path::PathBuf;

use onecode::{BAR_COUNT, IntelligentMailBarcode, RoutingCode, SymbologyTable, format};

/// Field-label width for the --verbose stage trace.
const LABEL_WIDTH: usize = 32;

#[derive(Parser)]
#[command(name = "onecode")]
#[command(version)]
#[command(about = "Encode USPS Intelligent Mail barcodes", long_about = None)]
struct Cli {
    /// Two-digit barcode id (00-94, second digit 0-4)
    #[arg(short, long)]
    barcode_id: u8,

    /// Three-digit service type
    #[arg(short, long)]
    service_type: u16,

    /// Six- or nine-digit mailer id
    #[arg(short, long)]
    mailer_id: u32,

    /// Serial number; its digit width complements the mailer id's
    #[arg(short = 'n', long)]
    serial_number: u32,

    /// Routing digits: ZIP, ZIP+4, or ZIP+4 plus delivery point
    /// (punctuation is ignored; omit for no routing code)
    #[arg(value_name = "ROUTING")]
    routing: Option<String>,

    /// Draw the barcode as ascender, tracker, and descender rows
    #[arg(short, long)]
    draw: bool,

    /// Print the barcode packed into one integer
    #[arg(long)]
    numeric: bool,

    /// Print every encoding stage before the result
    #[arg(short, long)]
    verbose: bool,

    /// Emit the derived fields as JSON
    #[arg(long)]
    json: bool,

    /// Load the symbology table from a TOML file instead of the bundled one
    #[arg(long, value_name = "FILE")]
    table: Option<PathBuf>,
}

#[derive(Serialize)]
struct Derived {
    barcode: String,
    routing_code: String,
    tracking_code: String,
    binary_data: String,
    frame_check_sequence: u16,
    codewords: Vec<u16>,
    characters: Vec<u16>,
    bars: Vec<u8>,
}

impl From<&IntelligentMailBarcode> for Derived {
    fn from(barcode: &IntelligentMailBarcode) -> Self {
        Derived {
            barcode: barcode.to_string(),
            routing_code: barcode.routing_code().to_string(),
            tracking_code: barcode.tracking_code().to_string(),
            binary_data: barcode.binary_data().to_string(),
            frame_check_sequence: barcode.frame_check_sequence(),
            codewords: barcode.codewords().to_vec(),
            characters: barcode.characters().to_vec(),
            bars: barcode.bars().iter().map(|bar| bar.value()).collect(),
        }
    }
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {}", err);
        std::process::exit(1);
    }
}

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let routing_code = match &cli.routing {
        Some(digits) => digits.parse::<RoutingCode>()?,
        None => RoutingCode::default(),
    };

    let barcode = match &cli.table {
        Some(path) => {
            let table = SymbologyTable::load_from_file(path)?;
            IntelligentMailBarcode::with_table(
                cli.barcode_id,
                cli.service_type,
                cli.mailer_id,
                cli.serial_number,
                routing_code,
                &table,
            )?
        }
        None => IntelligentMailBarcode::new(
            cli.barcode_id,
            cli.service_type,
            cli.mailer_id,
            cli.serial_number,
            routing_code,
        )?,
    };

    if cli.verbose {
        print_stages(&barcode);
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&Derived::from(&barcode))?);
    } else if cli.draw {
        println!("{}", barcode.draw());
    } else if cli.numeric {
        println!("{}", barcode.to_integer());
    } else {
        println!("{}", barcode);
    }

    Ok(())
}

fn print_stages(barcode: &IntelligentMailBarcode) {
    let stages = [
        (
            "Binary Data:",
            format::group(&format::to_hex(barcode.binary_data(), 26), 2, " "),
        ),
        (
            "Frame Check Sequence:",
            format::to_hex(&barcode.frame_check_sequence(), 3),
        ),
        (
            "Codewords:",
            barcode
                .codewords()
                .iter()
                .map(|codeword| codeword.to_string())
                .collect::<Vec<_>>()
                .join(" "),
        ),
        (
            "Characters:",
            barcode
                .characters()
                .iter()
                .map(|character| format::to_hex(character, 4))
                .collect::<Vec<_>>()
                .join(" "),
        ),
        (
            "Barcode Quaternary:",
            format::to_quat(&barcode.to_integer(), BAR_COUNT),
        ),
    ];
    for (label, value) in stages {
        println!("{:<label_width$}{:>bar_count$}", label, value, label_width = LABEL_WIDTH, bar_count = BAR_COUNT);
    }
}
