//! CNAB 240 Pix Remittance CLI
//!
//! Loads a payer account and a payment batch from CSV files, assembles the
//! remittance records and writes the `.REM` file to the working directory.
//!
//! # Usage
//!
//! ```bash
//! cargo run -- payer.csv payments.csv 42
//! ```
//!
//! Prints the generated file name on success. The caller owns incrementing
//! and storing the file sequence number between runs.
//!
//! # Environment Variables
//!
//! - `RUST_LOG`: Set to `debug` or `warn` to control logging verbosity

use cnab240_pix::{input, BatchAssembler, RemittanceError, Result};
use std::env;
use std::fs::{self, File};
use std::io::BufReader;
use std::process;

fn main() {
    env_logger::init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 4 {
        return Err(RemittanceError::MissingArgument);
    }

    let payer_path = &args[1];
    let payments_path = &args[2];
    let file_sequence: u32 = args[3]
        .parse()
        .map_err(|_| RemittanceError::InvalidSequence(args[3].clone()))?;

    let payer = input::read_payer(BufReader::new(File::open(payer_path)?))?;
    let payments = input::read_payments(BufReader::new(File::open(payments_path)?))?;

    let assembler = BatchAssembler::new(payer);
    let file = assembler.assemble(&payments, file_sequence, chrono::Local::now().naive_local())?;

    fs::write(file.file_name(), file.contents())?;
    println!("{}", file.file_name());

    Ok(())
}
