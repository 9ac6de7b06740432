//! Check-digit validation.
//!
//! Both CPF and CNPJ end in two check digits computed from weighted sums
//! modulo 11. CPF weights descend from 10 (first digit) or 11 (second);
//! CNPJ weights cycle 5..2 then 9..2 (first) and 6..2 then 9..2 (second).

use crate::{strip_digits, TaxIdKind};
use serde::{Deserialize, Serialize};

/// Outcome of validating a candidate identifier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct Validity {
    pub valid: bool,
    pub kind: Option<TaxIdKind>,
    /// Human-readable message for the host to display on failure.
    pub reason: Option<String>,
}

impl Validity {
    fn valid(kind: Option<TaxIdKind>) -> Self {
        Self {
            valid: true,
            kind,
            reason: None,
        }
    }

    fn invalid(kind: TaxIdKind) -> Self {
        Self {
            valid: false,
            kind: Some(kind),
            reason: Some(format!("Invalid {}", kind.display_name())),
        }
    }
}

/// Validate a formatted or bare identifier.
///
/// Non-digit characters are stripped first. An empty result means no
/// identifier was entered, which is not an error. Exactly 14 digits are
/// checked as CNPJ; everything else runs the CPF path, where any length
/// other than 11 is invalid outright.
///
/// # Examples
/// ```
/// use cadastro_ids::validate_tax_id;
/// assert!(validate_tax_id("529.982.247-25").valid);
/// assert!(validate_tax_id("").valid);
/// assert!(!validate_tax_id("529.982.247-26").valid);
/// ```
pub fn validate_tax_id(input: &str) -> Validity {
    let digits = strip_digits(input);

    if digits.is_empty() {
        return Validity::valid(None);
    }

    if digits.len() == 14 {
        if is_valid_cnpj(&digits) {
            Validity::valid(Some(TaxIdKind::Cnpj))
        } else {
            Validity::invalid(TaxIdKind::Cnpj)
        }
    } else if is_valid_cpf(&digits) {
        Validity::valid(Some(TaxIdKind::Cpf))
    } else {
        Validity::invalid(TaxIdKind::Cpf)
    }
}

/// CPF checksum predicate. Strips non-digits internally; anything other
/// than 11 digits is invalid.
pub fn is_valid_cpf(cpf: &str) -> bool {
    let digits = to_digit_values(cpf);
    if digits.len() != 11 || is_repeated(&digits) {
        return false;
    }

    cpf_check_digit(&digits[..9]) == digits[9] && cpf_check_digit(&digits[..10]) == digits[10]
}

/// CNPJ checksum predicate. Strips non-digits internally; anything other
/// than 14 digits is invalid.
pub fn is_valid_cnpj(cnpj: &str) -> bool {
    let digits = to_digit_values(cnpj);
    if digits.len() != 14 || is_repeated(&digits) {
        return false;
    }

    cnpj_check_digit(&digits[..12]) == digits[12] && cnpj_check_digit(&digits[..13]) == digits[13]
}

fn to_digit_values(input: &str) -> Vec<u32> {
    input.chars().filter_map(|c| c.to_digit(10)).collect()
}

/// Sequences of a single repeated digit pass the checksum arithmetic but
/// are not issuable identifiers.
fn is_repeated(digits: &[u32]) -> bool {
    digits.windows(2).all(|w| w[0] == w[1])
}

/// CPF check digit over a 9- or 10-digit prefix. Weights descend from
/// `len + 1` down to 2; a remainder of 10 maps to 0.
fn cpf_check_digit(prefix: &[u32]) -> u32 {
    let sum: u32 = prefix
        .iter()
        .enumerate()
        .map(|(i, &d)| d * (prefix.len() as u32 + 1 - i as u32))
        .sum();
    let rest = (sum * 10) % 11;
    if rest >= 10 {
        0
    } else {
        rest
    }
}

/// CNPJ check digit over a 12- or 13-digit prefix. Weights start at
/// `len - 7`, descend to 2, then wrap to 9.
fn cnpj_check_digit(prefix: &[u32]) -> u32 {
    let mut weight = prefix.len() as u32 - 7;
    let mut sum = 0;
    for &d in prefix {
        sum += d * weight;
        weight -= 1;
        if weight < 2 {
            weight = 9;
        }
    }
    if sum % 11 < 2 {
        0
    } else {
        11 - sum % 11
    }
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn validate_tax_id_ffi(input: String) -> Validity {
    validate_tax_id(&input)
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn is_valid_cpf_ffi(cpf: String) -> bool {
    is_valid_cpf(&cpf)
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn is_valid_cnpj_ffi(cnpj: String) -> bool {
    is_valid_cnpj(&cnpj)
}
