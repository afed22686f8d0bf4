//! Payment method enumeration
//!
//! Methods arrive as free-form labels ("Cartão de Crédito", "cartao de
//! credito", "Débito Automático") and are matched case- and
//! diacritics-insensitively onto one closed set. Anything unrecognized lands
//! in `Other` rather than failing.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How an expense or bill is paid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum PaymentMethod {
    CreditCard,
    Debit,
    #[default]
    Pix,
    Cash,
    BankSlip,
    Transfer,
    Other,
}

impl PaymentMethod {
    /// Match a free-form label onto the enumeration
    ///
    /// Total: unmapped labels become `Other` rather than erroring.
    pub fn parse(label: &str) -> Self {
        let norm = normalize(label);

        if norm.contains("cartao") || norm.contains("credit card") {
            Self::CreditCard
        } else if norm.contains("debito") || norm == "debit" {
            Self::Debit
        } else if norm == "pix" {
            Self::Pix
        } else if norm.contains("dinheiro") || norm == "cash" {
            Self::Cash
        } else if norm.contains("boleto") || norm.contains("bank slip") || norm.contains("bank-slip")
        {
            Self::BankSlip
        } else if norm.contains("transferencia") || norm == "transfer" {
            Self::Transfer
        } else {
            Self::Other
        }
    }

    /// Canonical display label
    pub fn label(&self) -> &'static str {
        match self {
            Self::CreditCard => "Cartão de Crédito",
            Self::Debit => "Débito",
            Self::Pix => "Pix",
            Self::Cash => "Dinheiro",
            Self::BankSlip => "Boleto",
            Self::Transfer => "Transferência",
            Self::Other => "Outros",
        }
    }

    /// Whether this method belongs to the credit-card family
    pub fn is_card(&self) -> bool {
        matches!(self, Self::CreditCard)
    }
}

impl fmt::Display for PaymentMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Lowercase and strip the Portuguese diacritics that show up in method labels
fn normalize(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            'á' | 'à' | 'â' | 'ã' | 'Á' | 'À' | 'Â' | 'Ã' => 'a',
            'é' | 'ê' | 'É' | 'Ê' => 'e',
            'í' | 'Í' => 'i',
            'ó' | 'ô' | 'õ' | 'Ó' | 'Ô' | 'Õ' => 'o',
            'ú' | 'Ú' => 'u',
            'ç' | 'Ç' => 'c',
            c => c.to_ascii_lowercase(),
        })
        .collect::<String>()
        .trim()
        .to_string()
}
