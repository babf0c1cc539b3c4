//! Display currency
//!
//! The tracker does no conversion; the currency only decides which symbol
//! amounts are printed with.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Supported currencies, persisted by their symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Currency {
    #[default]
    #[serde(rename = "kr")]
    Sek,
    #[serde(rename = "$")]
    Usd,
    #[serde(rename = "€")]
    Euro,
}

impl Currency {
    /// Every currency in selection order
    pub const ALL: &'static [Currency] = &[Currency::Sek, Currency::Usd, Currency::Euro];

    /// Symbol printed next to amounts
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Sek => "kr",
            Self::Usd => "$",
            Self::Euro => "€",
        }
    }

    /// Short code shown in selection lists
    pub fn code(&self) -> &'static str {
        match self {
            Self::Sek => "SEK",
            Self::Usd => "USD",
            Self::Euro => "EURO",
        }
    }

    /// Whether the symbol is written before the amount
    pub fn is_prefix(&self) -> bool {
        matches!(self, Self::Usd)
    }

    /// Format an already formatted number with this currency's symbol
    pub fn attach(&self, formatted: &str) -> String {
        if self.is_prefix() {
            format!("{}{}", self.symbol(), formatted)
        } else {
            format!("{} {}", formatted, self.symbol())
        }
    }
}

impl fmt::Display for Currency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Error returned for unsupported currency input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnknownCurrency(pub String);

impl fmt::Display for UnknownCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Unknown currency '{}' (expected kr, $, € or SEK, USD, EURO)", self.0)
    }
}

impl std::error::Error for UnknownCurrency {}

impl FromStr for Currency {
    type Err = UnknownCurrency;

    /// Accepts either the symbol or the code, optionally JSON-quoted
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim().trim_matches('"');
        Currency::ALL
            .iter()
            .copied()
            .find(|c| c.symbol() == trimmed || c.code().eq_ignore_ascii_case(trimmed))
            .or_else(|| match trimmed.to_ascii_uppercase().as_str() {
                "EUR" => Some(Currency::Euro),
                _ => None,
            })
            .ok_or_else(|| UnknownCurrency(s.to_string()))
    }
}
