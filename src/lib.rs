//! # CNAB 240 Pix Remittance
//!
//! Assembles batches of Pix credit-transfer payment instructions into
//! fixed-width CNAB 240 remittance files for Banco Inter.
//!
//! ## Design Principles
//!
//! - **Declarative record codec**: six per-record-type field tables rendered
//!   to exactly 240 characters, with the widths checked at render time
//! - **Integer cents**: monetary fields and totals use minor units via
//!   `rust_decimal`, so aggregates never drift
//! - **Atomic validation**: bad input fails before any record is built;
//!   callers get a complete file or one descriptive error
//! - **Deterministic output**: identical inputs and generation timestamp
//!   produce byte-identical files
//!
//! ## Example
//!
//! ```
//! use cnab240_pix::{BatchAssembler, PayerAccount, PaymentInstruction, PixKeyType};
//! use chrono::NaiveDate;
//!
//! let payer = PayerAccount {
//!     tax_id: "53914002000152".into(),
//!     name: "ACME LTDA".into(),
//!     agency: "0001".into(),
//!     agency_check_digit: "9".into(),
//!     account_number: "34242533".into(),
//!     account_check_digit: "1".into(),
//!     street: "RUA DO SOL".into(),
//!     number: "368".into(),
//!     complement: String::new(),
//!     city: "CURITIBA".into(),
//!     postal_code: "81910350".into(),
//!     state: "PR".into(),
//! };
//! let payments = vec![PaymentInstruction {
//!     payee_name: "JOAO DA SILVA".into(),
//!     key_type: PixKeyType::Email,
//!     key_value: "joao@example.com".into(),
//!     amount: "1250.00".parse().unwrap(),
//! }];
//! let generated_at = NaiveDate::from_ymd_opt(2026, 8, 6)
//!     .unwrap()
//!     .and_hms_opt(9, 30, 0)
//!     .unwrap();
//!
//! let file = BatchAssembler::new(payer)
//!     .assemble(&payments, 42, generated_at)
//!     .unwrap();
//! assert_eq!(file.records().len(), 6);
//! assert_eq!(file.file_name(), "C1240_001_0000042.REM");
//! assert!(file.records().iter().all(|r| r.line().len() == 240));
//! ```

pub mod amount;
pub mod assembler;
pub mod error;
pub mod field;
pub mod input;
pub mod payment;
pub mod record;

pub use amount::Amount;
pub use assembler::{BatchAssembler, RemittanceFile};
pub use error::{RemittanceError, Result};
pub use payment::{PayerAccount, PaymentInstruction, PaymentRow, PixKeyType};
pub use record::{Record, RecordBuilder, RecordKind, RECORD_LEN};
