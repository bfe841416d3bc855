//! CSV input loading for the command-line front end.
//!
//! The assembler core is pure; this module owns reading the payer account
//! and the ordered payment list from CSV. Any malformed row fails the whole
//! run, so a partial remittance file is never produced.

use crate::error::{RemittanceError, Result};
use crate::payment::{PayerAccount, PaymentInstruction, PaymentRow};
use csv::{ReaderBuilder, Trim};
use log::debug;
use std::io::Read;

/// Reads the payer account from a single-row CSV file.
///
/// Only the first data row is used; `agency`, `agency_check_digit` and
/// `complement` columns may be omitted.
pub fn read_payer<R: Read>(reader: R) -> Result<PayerAccount> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);
    let payer = csv_reader
        .deserialize::<PayerAccount>()
        .next()
        .ok_or(RemittanceError::MissingPayer)??;
    Ok(payer)
}

/// Reads the ordered payment list from CSV.
///
/// Input order is preserved; it directly determines the in-batch sequence
/// numbers. Errors carry the offending row number.
pub fn read_payments<R: Read>(reader: R) -> Result<Vec<PaymentInstruction>> {
    let mut csv_reader = ReaderBuilder::new().trim(Trim::All).from_reader(reader);

    let mut payments = Vec::new();
    for (row_idx, result) in csv_reader.deserialize::<PaymentRow>().enumerate() {
        let row_num = row_idx + 2; // 1-indexed, accounting for header row

        let row = result?;
        let payment = row.parse().map_err(|e| RemittanceError::InvalidRecord {
            row: row_num,
            message: e.to_string(),
        })?;
        payments.push(payment);
    }

    debug!("Loaded {} payment(s)", payments.len());
    Ok(payments)
}
