//! Core identifier kind type.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The two Brazilian taxpayer identifier kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[cfg_attr(feature = "native", derive(uniffi::Enum))]
pub enum TaxIdKind {
    /// Cadastro de Pessoas Físicas (individual), 11 digits.
    #[default]
    Cpf,
    /// Cadastro Nacional da Pessoa Jurídica (corporate), 14 digits.
    Cnpj,
}

impl TaxIdKind {
    /// Number of digits in a complete identifier of this kind.
    pub fn max_digits(&self) -> u32 {
        match self {
            Self::Cpf => 11,
            Self::Cnpj => 14,
        }
    }

    /// Length of the fully masked form (digits plus separators).
    ///
    /// Hosts use this as the max-length constraint on the input control.
    pub fn max_formatted_len(&self) -> u32 {
        match self {
            Self::Cpf => 14,  // 000.000.000-00
            Self::Cnpj => 18, // 00.000.000/0000-00
        }
    }

    /// Display name for UI and messages.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Cpf => "CPF",
            Self::Cnpj => "CNPJ",
        }
    }

    /// Infer the kind from a stripped digit count, if it matches a
    /// complete identifier length.
    pub fn from_digit_len(len: usize) -> Option<Self> {
        match len {
            11 => Some(Self::Cpf),
            14 => Some(Self::Cnpj),
            _ => None,
        }
    }

    /// Parse a host configuration value, case insensitive.
    ///
    /// Recognized values are `"cpf"`, `"cnpj"`, and `""`; empty and
    /// unrecognized values fall back to CPF, the default kind.
    pub fn from_config(value: &str) -> Self {
        value.trim().parse().unwrap_or_default()
    }
}

impl fmt::Display for TaxIdKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Error for strict kind parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized identifier kind: {0:?} (expected \"cpf\" or \"cnpj\")")]
pub struct KindParseError(pub String);

impl FromStr for TaxIdKind {
    type Err = KindParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "cpf" => Ok(Self::Cpf),
            "cnpj" => Ok(Self::Cnpj),
            other => Err(KindParseError(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_maxima() {
        assert_eq!(TaxIdKind::Cpf.max_digits(), 11);
        assert_eq!(TaxIdKind::Cnpj.max_digits(), 14);
        assert_eq!(TaxIdKind::Cpf.max_formatted_len(), 14);
        assert_eq!(TaxIdKind::Cnpj.max_formatted_len(), 18);
    }

    #[test]
    fn from_config_recognized() {
        assert_eq!(TaxIdKind::from_config("cpf"), TaxIdKind::Cpf);
        assert_eq!(TaxIdKind::from_config("CNPJ"), TaxIdKind::Cnpj);
        assert_eq!(TaxIdKind::from_config("  cnpj  "), TaxIdKind::Cnpj);
    }

    #[test]
    fn from_config_default() {
        assert_eq!(TaxIdKind::from_config(""), TaxIdKind::Cpf);
        assert_eq!(TaxIdKind::from_config("rg"), TaxIdKind::Cpf);
    }

    #[test]
    fn strict_parse_rejects_unknown() {
        assert!("cpf".parse::<TaxIdKind>().is_ok());
        assert!("rg".parse::<TaxIdKind>().is_err());
        assert!("".parse::<TaxIdKind>().is_err());
    }

    #[test]
    fn infer_from_length() {
        assert_eq!(TaxIdKind::from_digit_len(11), Some(TaxIdKind::Cpf));
        assert_eq!(TaxIdKind::from_digit_len(14), Some(TaxIdKind::Cnpj));
        assert_eq!(TaxIdKind::from_digit_len(12), None);
        assert_eq!(TaxIdKind::from_digit_len(0), None);
    }
}
