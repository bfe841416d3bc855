//! Remittance assembly: orchestrates the record sequence for one file.
//!
//! The assembler validates everything up front, then walks the payment
//! list exactly once in input order, accumulating the running record count
//! and integer-cent total the trailers need. It is a pure transform:
//! identical inputs and generation timestamp produce byte-identical output.

use crate::error::{RemittanceError, Result};
use crate::payment::{PayerAccount, PaymentInstruction};
use crate::record::{Record, RecordBuilder, DEFAULT_SERVICE_TYPE, RECORD_LEN};
use chrono::NaiveDateTime;
use log::debug;

/// An assembled, immutable CNAB 240 remittance file.
///
/// # Invariants
///
/// - Exactly one `FileHeader` (first) and one `FileTrailer` (last)
/// - Exactly one `BatchHeader` and one `BatchTrailer`
/// - For N payments, N interleaved Segment A/B pairs with in-batch
///   sequence numbers `1..=2N` in input order
#[derive(Debug, Clone)]
pub struct RemittanceFile {
    records: Vec<Record>,
    file_sequence: u32,
}

impl RemittanceFile {
    /// The assembled records, in file order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    /// The name the receiving bank expects for this file.
    pub fn file_name(&self) -> String {
        format!("C1240_001_{:07}.REM", self.file_sequence)
    }

    /// Full file contents: one newline-terminated 240-character line per
    /// record.
    pub fn contents(&self) -> String {
        let mut out = String::with_capacity(self.records.len() * (RECORD_LEN + 1));
        for record in &self.records {
            out.push_str(record.line());
            out.push('\n');
        }
        out
    }
}

/// Assembles payment batches into remittance files.
///
/// Validation happens before any record is built, so a failed run never
/// yields a partial file. The caller owns the file sequence number and its
/// persistence between runs.
pub struct BatchAssembler {
    payer: PayerAccount,
    service_type: String,
}

impl BatchAssembler {
    /// Creates an assembler for the given payer with the default service
    /// type (salary payments).
    pub fn new(payer: PayerAccount) -> Self {
        BatchAssembler {
            payer,
            service_type: DEFAULT_SERVICE_TYPE.to_string(),
        }
    }

    /// Overrides the batch service-type code.
    pub fn with_service_type(mut self, code: impl Into<String>) -> Self {
        self.service_type = code.into();
        self
    }

    /// Assembles the full record sequence for one file.
    ///
    /// Payments are processed exactly once, in input order; order directly
    /// determines the in-batch sequence numbers. An empty payment list is
    /// valid and yields the four structural records.
    pub fn assemble(
        &self,
        payments: &[PaymentInstruction],
        file_sequence: u32,
        generated_at: NaiveDateTime,
    ) -> Result<RemittanceFile> {
        self.payer.validate()?;
        for payment in payments {
            if !payment.amount.is_positive() {
                return Err(RemittanceError::NonPositiveAmount {
                    payee: payment.payee_name.clone(),
                    amount: payment.amount,
                });
            }
        }

        let builder = RecordBuilder::new(&self.payer, generated_at, &self.service_type);
        let mut records = Vec::with_capacity(payments.len() * 2 + 4);
        records.push(builder.file_header(file_sequence));
        records.push(builder.batch_header());

        let mut total_cents: i64 = 0;
        for (idx, payment) in payments.iter().enumerate() {
            let index = idx + 1; // sequence numbers start at 1 in input order
            total_cents += payment.amount.cents();
            records.push(builder.segment_a(index, payment));
            records.push(builder.segment_b(index, payment));
            debug!(
                "Payment {}: {} cents to {}",
                index,
                payment.amount.cents(),
                payment.payee_name
            );
        }

        records.push(builder.batch_trailer(payments.len(), total_cents));
        // The trailer's record count includes the trailer itself.
        records.push(builder.file_trailer(records.len() + 1));

        debug!(
            "Assembled {} records for file sequence {}",
            records.len(),
            file_sequence
        );

        Ok(RemittanceFile {
            records,
            file_sequence,
        })
    }
}
