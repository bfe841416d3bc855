//! Payment and payer models plus the Pix key classification rules.

use crate::amount::Amount;
use crate::error::{RemittanceError, Result};
use serde::Deserialize;
use std::str::FromStr;

/// Pix key types accepted in a payment batch.
///
/// The enum closes the set: once input parsing succeeds, no unsupported
/// key type can reach the record builder.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixKeyType {
    /// Cellphone number key
    Cellphone,

    /// Email address key
    Email,

    /// Individual taxpayer document (CPF) key
    Cpf,

    /// Corporate taxpayer document (CNPJ) key
    Cnpj,

    /// Random UUID key
    Random,

    /// Full bank routing details instead of a key
    BankDetails,
}

impl PixKeyType {
    /// Bank-defined initiation code for the key type.
    ///
    /// CPF and CNPJ share the single document code "03".
    pub fn bank_code(&self) -> &'static str {
        match self {
            PixKeyType::Cellphone => "01",
            PixKeyType::Email => "02",
            PixKeyType::Cpf | PixKeyType::Cnpj => "03",
            PixKeyType::Random => "04",
            PixKeyType::BankDetails => "05",
        }
    }

    /// Payee inscription code: corporate for CNPJ, natural person for
    /// everything else. Non-document keys also use the natural-person
    /// code; that is what the bank layout prescribes, not an oversight.
    pub fn inscription_code(&self) -> &'static str {
        match self {
            PixKeyType::Cnpj => "2",
            _ => "1",
        }
    }

    /// Whether the key is a taxpayer document (CPF/CNPJ).
    ///
    /// Document keys populate the numeric document field of Segment B and
    /// leave the key-text field blank; all other keys carry the key
    /// verbatim in the key-text field and zeros in the document field.
    pub fn is_document(&self) -> bool {
        matches!(self, PixKeyType::Cpf | PixKeyType::Cnpj)
    }
}

impl FromStr for PixKeyType {
    type Err = RemittanceError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_uppercase().as_str() {
            "CELLPHONE" => Ok(PixKeyType::Cellphone),
            "EMAIL" => Ok(PixKeyType::Email),
            "CPF" => Ok(PixKeyType::Cpf),
            "CNPJ" => Ok(PixKeyType::Cnpj),
            "RANDOM" => Ok(PixKeyType::Random),
            "BANK_DETAILS" => Ok(PixKeyType::BankDetails),
            other => Err(RemittanceError::UnknownKeyType(other.to_string())),
        }
    }
}

/// A single Pix credit, emitted as one Segment A/B pair.
#[derive(Debug, Clone)]
pub struct PaymentInstruction {
    /// Payee name as printed in Segment A
    pub payee_name: String,

    /// Pix key type, drives Segment B's conditional fields
    pub key_type: PixKeyType,

    /// Key text (document digits for CPF/CNPJ, verbatim key otherwise)
    pub key_value: String,

    /// Payment amount, must be strictly positive
    pub amount: Amount,
}

/// The paying company, supplied once per file.
///
/// `agency` and `agency_check_digit` default to the values Banco Inter
/// fixes for every account ("0001"/"9"), so CSV input may omit them.
#[derive(Debug, Clone, Deserialize)]
pub struct PayerAccount {
    /// Company CNPJ (14 digits; punctuation is stripped on encode)
    pub tax_id: String,

    /// Company legal name
    pub name: String,

    /// Branch number
    #[serde(default = "default_agency")]
    pub agency: String,

    /// Branch check digit
    #[serde(default = "default_agency_check_digit")]
    pub agency_check_digit: String,

    /// Account number
    pub account_number: String,

    /// Account check digit
    pub account_check_digit: String,

    /// Street address
    pub street: String,

    /// Street number
    pub number: String,

    /// Address complement, optional
    #[serde(default)]
    pub complement: String,

    /// City name
    pub city: String,

    /// Postal code (CEP), 8 digits
    pub postal_code: String,

    /// Two-letter state code
    pub state: String,
}

fn default_agency() -> String {
    "0001".to_string()
}

fn default_agency_check_digit() -> String {
    "9".to_string()
}

impl PayerAccount {
    /// Checks the fields the bank requires before any record is emitted.
    ///
    /// Address fields may be empty; the lenient formatters render them as
    /// blanks, which the layout tolerates.
    pub fn validate(&self) -> Result<()> {
        for (field, value) in [
            ("tax_id", &self.tax_id),
            ("name", &self.name),
            ("account_number", &self.account_number),
            ("account_check_digit", &self.account_check_digit),
        ] {
            if value.trim().is_empty() {
                return Err(RemittanceError::MissingPayerField(field));
            }
        }
        Ok(())
    }
}

/// Raw payment row as read from CSV input.
///
/// Key type and amount arrive as text and are validated by [`parse`];
/// any malformed field fails the whole run so a partial remittance file
/// is never produced.
///
/// [`parse`]: PaymentRow::parse
#[derive(Debug, Deserialize)]
pub struct PaymentRow {
    /// Payee name
    pub name: String,

    /// Key type name: CELLPHONE, EMAIL, CPF, CNPJ, RANDOM, BANK_DETAILS
    pub key_type: String,

    /// Key text
    pub key_value: String,

    /// Decimal amount, e.g. "1250.50"
    pub amount: String,
}

impl PaymentRow {
    /// Parses the raw row into a typed payment instruction.
    pub fn parse(&self) -> Result<PaymentInstruction> {
        let key_type = self.key_type.parse::<PixKeyType>()?;
        let amount = Amount::from_str(&self.amount)
            .map_err(|_| RemittanceError::InvalidAmount(self.amount.clone()))?;

        Ok(PaymentInstruction {
            payee_name: self.name.trim().to_string(),
            key_type,
            key_value: self.key_value.trim().to_string(),
            amount,
        })
    }
}
