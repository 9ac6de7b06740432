//! Identifier extraction from text.

use crate::{is_valid_cnpj, is_valid_cpf, strip_digits, TaxIdKind};
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

/// Extracted identifier with position information.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "native", derive(uniffi::Record))]
pub struct ExtractedTaxId {
    pub kind: TaxIdKind,
    /// Stripped digit string; re-mask with `format_tax_id` for display.
    pub value: String,
    pub start_index: u32,
    pub end_index: u32,
}

lazy_static! {
    // CPF: masked (000.000.000-00) or bare 11 digits
    static ref CPF_REGEX: Regex =
        Regex::new(r"\b(?P<cpf>\d{3}\.?\d{3}\.?\d{3}-?\d{2})\b").unwrap();

    // CNPJ: masked (00.000.000/0000-00) or bare 14 digits
    static ref CNPJ_REGEX: Regex =
        Regex::new(r"\b(?P<cnpj>\d{2}\.?\d{3}\.?\d{3}/?\d{4}-?\d{2})\b").unwrap();
}

/// Extract checksum-valid CPFs from text.
pub fn extract_cpfs(text: String) -> Vec<String> {
    CPF_REGEX
        .captures_iter(&text)
        .filter_map(|cap| cap.name("cpf"))
        .map(|m| strip_digits(m.as_str()))
        .filter(|cpf| is_valid_cpf(cpf))
        .collect()
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn extract_cpfs_ffi(text: String) -> Vec<String> {
    extract_cpfs(text)
}

/// Extract checksum-valid CNPJs from text.
pub fn extract_cnpjs(text: String) -> Vec<String> {
    CNPJ_REGEX
        .captures_iter(&text)
        .filter_map(|cap| cap.name("cnpj"))
        .map(|m| strip_digits(m.as_str()))
        .filter(|cnpj| is_valid_cnpj(cnpj))
        .collect()
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn extract_cnpjs_ffi(text: String) -> Vec<String> {
    extract_cnpjs(text)
}

/// Extract all checksum-valid identifiers from text, sorted by position.
pub fn extract_all(text: String) -> Vec<ExtractedTaxId> {
    let mut results = Vec::new();

    for cap in CPF_REGEX.captures_iter(&text) {
        if let Some(m) = cap.name("cpf") {
            let digits = strip_digits(m.as_str());
            if is_valid_cpf(&digits) {
                results.push(ExtractedTaxId {
                    kind: TaxIdKind::Cpf,
                    value: digits,
                    start_index: m.start() as u32,
                    end_index: m.end() as u32,
                });
            }
        }
    }

    for cap in CNPJ_REGEX.captures_iter(&text) {
        if let Some(m) = cap.name("cnpj") {
            let digits = strip_digits(m.as_str());
            if is_valid_cnpj(&digits) {
                results.push(ExtractedTaxId {
                    kind: TaxIdKind::Cnpj,
                    value: digits,
                    start_index: m.start() as u32,
                    end_index: m.end() as u32,
                });
            }
        }
    }

    results.sort_by_key(|r| r.start_index);
    results
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn extract_all_ffi(text: String) -> Vec<ExtractedTaxId> {
    extract_all(text)
}
