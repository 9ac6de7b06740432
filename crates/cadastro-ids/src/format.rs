//! Incremental mask formatting.
//!
//! Masks are rebuilt from the stripped digits on every call, so feeding an
//! already-masked string back in is a no-op and partially typed input gets
//! exactly the separators its digits have reached.

use crate::TaxIdKind;

/// Separator inserted before the digit at each index. Ascending order
/// matches the government-standard masks.
const CPF_MASK: &[(usize, char)] = &[(3, '.'), (6, '.'), (9, '-')];
const CNPJ_MASK: &[(usize, char)] = &[(2, '.'), (5, '.'), (8, '/'), (12, '-')];

/// Remove every character that is not a decimal digit.
pub fn strip_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Apply the kind's mask to arbitrary input.
///
/// Strips non-digits first, truncates at the kind's digit maximum, then
/// interleaves the literal separators. A separator only appears once a digit
/// follows it, so mid-typing input stays natural.
///
/// # Examples
/// ```
/// use cadastro_ids::{format_tax_id, TaxIdKind};
/// assert_eq!(format_tax_id("52998224725", TaxIdKind::Cpf), "529.982.247-25");
/// assert_eq!(format_tax_id("5299", TaxIdKind::Cpf), "529.9");
/// assert_eq!(format_tax_id("11222333000181", TaxIdKind::Cnpj), "11.222.333/0001-81");
/// ```
pub fn format_tax_id(input: &str, kind: TaxIdKind) -> String {
    let digits = strip_digits(input);
    let mask = match kind {
        TaxIdKind::Cpf => CPF_MASK,
        TaxIdKind::Cnpj => CNPJ_MASK,
    };

    let mut out = String::with_capacity(kind.max_formatted_len() as usize);
    for (i, d) in digits
        .chars()
        .take(kind.max_digits() as usize)
        .enumerate()
    {
        if let Some(&(_, sep)) = mask.iter().find(|&&(pos, _)| pos == i) {
            out.push(sep);
        }
        out.push(d);
    }
    out
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn format_tax_id_ffi(input: String, kind: TaxIdKind) -> String {
    format_tax_id(&input, kind)
}

#[cfg(feature = "native")]
#[uniffi::export]
pub fn strip_digits_ffi(input: String) -> String {
    strip_digits(&input)
}
