//! CNAB 240 record templates.
//!
//! Each of the six record types is a declarative table of positionally
//! addressed fields (name, width, formatter, value) rendered by a shared
//! walker into exactly [`RECORD_LEN`] characters. The walker asserts that a
//! template's widths sum to the record length, so a miscounted layout fails
//! loudly instead of producing a shifted file.
//!
//! Field order, widths and constants follow Banco Inter's single-batch
//! Pix-credit layout.

use crate::field;
use crate::payment::{PayerAccount, PaymentInstruction};
use chrono::NaiveDateTime;

/// Width of every CNAB 240 record, in characters.
pub const RECORD_LEN: usize = 240;

/// Bank code for Banco Inter.
pub const BANK_CODE: &str = "077";

/// Default service type: salary payments.
pub const DEFAULT_SERVICE_TYPE: &str = "30";

const BANK_NAME: &str = "BANCO INTER";
const FILE_LAYOUT_VERSION: &str = "107";
const BATCH_LAYOUT_VERSION: &str = "046";
const RECORDING_DENSITY: &str = "01600";
const PAYMENT_METHOD_PIX: &str = "45";
const CURRENCY: &str = "BRL";

/// Identifies which of the six layouts a record line uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    /// File-level header, first record
    FileHeader,

    /// Batch-level header
    BatchHeader,

    /// Per-payment transfer data
    SegmentA,

    /// Per-payment beneficiary/key data
    SegmentB,

    /// Batch-level trailer with count and total
    BatchTrailer,

    /// File-level trailer, last record
    FileTrailer,
}

/// A single assembled 240-character line.
#[derive(Debug, Clone)]
pub struct Record {
    kind: RecordKind,
    line: String,
}

impl Record {
    /// Which layout this record uses.
    pub fn kind(&self) -> RecordKind {
        self.kind
    }

    /// The 240-character line, without a terminator.
    pub fn line(&self) -> &str {
        &self.line
    }
}

/// Formatting rule applied to a field value.
enum Fmt {
    Alpha,
    Num,
    Key,
}

/// One entry of a record template.
struct Field {
    name: &'static str,
    fmt: Fmt,
    value: String,
    width: usize,
}

impl Field {
    fn alpha(name: &'static str, value: &str, width: usize) -> Self {
        Field {
            name,
            fmt: Fmt::Alpha,
            value: value.to_string(),
            width,
        }
    }

    fn num(name: &'static str, value: &str, width: usize) -> Self {
        Field {
            name,
            fmt: Fmt::Num,
            value: value.to_string(),
            width,
        }
    }

    fn key(name: &'static str, value: &str, width: usize) -> Self {
        Field {
            name,
            fmt: Fmt::Key,
            value: value.to_string(),
            width,
        }
    }
}

/// Walks a template and concatenates its encoded fields.
fn render(kind: RecordKind, fields: &[Field]) -> Record {
    let total: usize = fields.iter().map(|f| f.width).sum();
    assert_eq!(
        total, RECORD_LEN,
        "{:?} template widths must sum to {}",
        kind, RECORD_LEN
    );

    let mut line = String::with_capacity(RECORD_LEN);
    for f in fields {
        let encoded = match f.fmt {
            Fmt::Alpha => field::alpha(&f.value, f.width),
            Fmt::Num => field::num(&f.value, f.width),
            Fmt::Key => field::pix_key(&f.value, f.width),
        };
        debug_assert_eq!(
            encoded.chars().count(),
            f.width,
            "field {} must encode to {} chars",
            f.name,
            f.width
        );
        line.push_str(&encoded);
    }

    Record { kind, line }
}

/// Builds the six record layouts for one remittance file.
///
/// Holds the per-file context (payer, generation timestamp, service type)
/// so the assembler only supplies per-record data.
pub struct RecordBuilder<'a> {
    payer: &'a PayerAccount,
    date: String,
    time: String,
    service_type: &'a str,
}

impl<'a> RecordBuilder<'a> {
    /// Creates a builder for one file generation.
    pub fn new(payer: &'a PayerAccount, generated_at: NaiveDateTime, service_type: &'a str) -> Self {
        RecordBuilder {
            payer,
            date: generated_at.format("%d%m%Y").to_string(),
            time: generated_at.format("%H%M%S").to_string(),
            service_type,
        }
    }

    /// File header: record type "0", batch filler "0000".
    pub fn file_header(&self, file_sequence: u32) -> Record {
        render(
            RecordKind::FileHeader,
            &[
                Field::num("bank_code", BANK_CODE, 3),
                Field::num("service_batch", "0000", 4),
                Field::num("record_type", "0", 1),
                Field::alpha("febraban_1", "", 9),
                Field::num("payer_inscription_type", "2", 1),
                Field::num("payer_tax_id", &self.payer.tax_id, 14),
                Field::alpha("agreement_code", "", 20),
                Field::num("agency", &self.payer.agency, 5),
                Field::alpha("agency_check_digit", &self.payer.agency_check_digit, 1),
                Field::num("account_number", &self.payer.account_number, 12),
                Field::num("account_check_digit", &self.payer.account_check_digit, 1),
                Field::alpha("agency_account_check_digit", "", 1),
                Field::alpha("payer_name", &self.payer.name, 30),
                Field::alpha("bank_name", BANK_NAME, 30),
                Field::alpha("febraban_2", "", 10),
                Field::num("remittance_code", "1", 1),
                Field::num("generation_date", &self.date, 8),
                Field::num("generation_time", &self.time, 6),
                Field::num("file_sequence", &file_sequence.to_string(), 6),
                Field::num("layout_version", FILE_LAYOUT_VERSION, 3),
                Field::num("recording_density", RECORDING_DENSITY, 5),
                Field::alpha("bank_reserved", "", 20),
                Field::alpha("company_reserved", "", 20),
                Field::alpha("febraban_3", "", 29),
            ],
        )
    }

    /// Batch header: record type "1", operation "C" (credit).
    pub fn batch_header(&self) -> Record {
        let cep: String = self
            .payer
            .postal_code
            .chars()
            .filter(|c| c.is_ascii_digit())
            .collect();
        let (cep_prefix, cep_suffix) = cep.split_at(cep.len().min(5));

        render(
            RecordKind::BatchHeader,
            &[
                Field::num("bank_code", BANK_CODE, 3),
                Field::num("service_batch", "0001", 4),
                Field::num("record_type", "1", 1),
                Field::alpha("operation_type", "C", 1),
                Field::num("service_type", self.service_type, 2),
                Field::num("payment_method", PAYMENT_METHOD_PIX, 2),
                Field::num("layout_version", BATCH_LAYOUT_VERSION, 3),
                Field::alpha("febraban_1", "", 1),
                Field::num("payer_inscription_type", "2", 1),
                Field::num("payer_tax_id", &self.payer.tax_id, 14),
                Field::alpha("agreement_code", "", 20),
                Field::num("agency", &self.payer.agency, 5),
                Field::num("agency_check_digit", &self.payer.agency_check_digit, 1),
                Field::num("account_number", &self.payer.account_number, 12),
                Field::num("account_check_digit", &self.payer.account_check_digit, 1),
                Field::alpha("agency_account_check_digit", "", 1),
                Field::alpha("payer_name", &self.payer.name, 30),
                Field::alpha("message", "", 40),
                Field::alpha("street", &self.payer.street, 30),
                Field::num("street_number", &self.payer.number, 5),
                Field::alpha("complement", &self.payer.complement, 15),
                Field::alpha("city", &self.payer.city, 20),
                Field::num("postal_code", cep_prefix, 5),
                Field::num("postal_code_suffix", cep_suffix, 3),
                Field::alpha("state", &self.payer.state, 2),
                Field::alpha("febraban_2", "", 8),
                Field::alpha("occurrence_codes", "", 10),
            ],
        )
    }

    /// Segment A: transfer data for the payment at 1-based `index`.
    ///
    /// Payee routing fields are all zero; key-addressed Pix transfers carry
    /// no bank routing.
    pub fn segment_a(&self, index: usize, payment: &PaymentInstruction) -> Record {
        render(
            RecordKind::SegmentA,
            &[
                Field::num("bank_code", BANK_CODE, 3),
                Field::num("service_batch", "0001", 4),
                Field::num("record_type", "3", 1),
                Field::num("batch_sequence", &(index * 2 - 1).to_string(), 5),
                Field::alpha("segment", "A", 1),
                Field::num("movement_type", "0", 1),
                Field::num("instruction_code", "00", 2),
                Field::num("clearing_code", "000", 3),
                Field::num("payee_bank_code", "0", 3),
                Field::num("payee_agency", "0", 5),
                Field::num("payee_agency_check_digit", "0", 1),
                Field::num("payee_account", "0", 12),
                Field::num("payee_account_check_digit", "0", 1),
                Field::alpha("payee_agency_account_check_digit", "", 1),
                Field::alpha("payee_name", &payment.payee_name, 30),
                Field::alpha("document_number", &format!("PAG-{}", index), 20),
                Field::num("payment_date", &self.date, 8),
                Field::alpha("currency_code", CURRENCY, 3),
                Field::num("currency_quantity", "0", 15),
                Field::num("amount_cents", &payment.amount.cents().to_string(), 15),
                Field::alpha("bank_document_number", "", 20),
                Field::alpha("effective_date", "", 8),
                Field::num("effective_amount", "0", 15),
                Field::alpha("information_2", "", 40),
                Field::alpha("doc_purpose_code", "", 3),
                Field::alpha("purpose_complement", "", 10),
                Field::alpha("febraban_1", "", 10),
            ],
        )
    }

    /// Segment B: beneficiary key data for the payment at 1-based `index`.
    ///
    /// Document keys (CPF/CNPJ) fill the numeric document field and leave
    /// the key text blank; every other key type does the opposite.
    pub fn segment_b(&self, index: usize, payment: &PaymentInstruction) -> Record {
        let key = payment.key_type;
        let (document, key_text) = if key.is_document() {
            (payment.key_value.as_str(), "")
        } else {
            ("", payment.key_value.as_str())
        };

        render(
            RecordKind::SegmentB,
            &[
                Field::num("bank_code", BANK_CODE, 3),
                Field::num("service_batch", "0001", 4),
                Field::num("record_type", "3", 1),
                Field::num("batch_sequence", &(index * 2).to_string(), 5),
                Field::alpha("segment", "B", 1),
                Field::alpha("initiation_code", key.bank_code(), 3),
                Field::num("payee_inscription_type", key.inscription_code(), 1),
                Field::num("payee_document", document, 14),
                Field::alpha("transaction_id", "", 35),
                Field::alpha("filler", "", 60),
                Field::key("pix_key", key_text, 99),
                Field::alpha("febraban_1", "", 6),
                Field::num("ispb_code", "0", 8),
            ],
        )
    }

    /// Batch trailer: record type "5", count and monetary total.
    ///
    /// The count covers the batch header, both segments of every payment
    /// and this trailer: `2N + 2`.
    pub fn batch_trailer(&self, payment_count: usize, total_cents: i64) -> Record {
        let record_count = payment_count * 2 + 2;
        render(
            RecordKind::BatchTrailer,
            &[
                Field::num("bank_code", BANK_CODE, 3),
                Field::num("service_batch", "0001", 4),
                Field::num("record_type", "5", 1),
                Field::alpha("febraban_1", "", 9),
                Field::num("record_count", &record_count.to_string(), 6),
                Field::num("total_amount_cents", &total_cents.to_string(), 18),
                Field::num("total_currency_quantity", "0", 18),
                Field::alpha("debit_notice_number", "", 6),
                Field::alpha("febraban_2", "", 165),
                Field::alpha("occurrence_codes", "", 10),
            ],
        )
    }

    /// File trailer: record type "9", batch filler "9999".
    ///
    /// `total_records` counts every record in the file, this trailer
    /// included.
    pub fn file_trailer(&self, total_records: usize) -> Record {
        render(
            RecordKind::FileTrailer,
            &[
                Field::num("bank_code", BANK_CODE, 3),
                Field::num("service_batch", "9999", 4),
                Field::num("record_type", "9", 1),
                Field::alpha("febraban_1", "", 9),
                Field::num("batch_count", "1", 6),
                Field::num("record_count", &total_records.to_string(), 6),
                Field::alpha("febraban_2", "", 211),
            ],
        )
    }
}
