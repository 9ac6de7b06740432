//! Host field adapter.
//!
//! UI-agnostic stand-in for the input control that hosts a taxpayer
//! identifier field: it owns the current masked value and applies the
//! format-on-change / validate-on-blur policy. The host wires its own
//! events and message presentation around it.

use crate::{format_tax_id, validate_tax_id, TaxIdKind};
use serde::{Deserialize, Serialize};

/// State of a hosted CPF/CNPJ input field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxIdField {
    kind: TaxIdKind,
    value: String,
}

impl TaxIdField {
    pub fn new(kind: TaxIdKind) -> Self {
        Self {
            kind,
            value: String::new(),
        }
    }

    /// Build from a host configuration value ("cpf", "cnpj", "").
    pub fn from_config(config: &str) -> Self {
        Self::new(TaxIdKind::from_config(config))
    }

    pub fn kind(&self) -> TaxIdKind {
        self.kind
    }

    /// Current masked value, for the host to render.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Max-length constraint the host should put on its input control.
    pub fn max_length(&self) -> u32 {
        self.kind.max_formatted_len()
    }

    /// Replace the stored value from the host's bound property, re-masking.
    pub fn set_value(&mut self, value: &str) {
        self.value = format_tax_id(value, self.kind);
    }

    /// Called with the control's settled text after each change; returns
    /// the masked value the host should display.
    pub fn input_changed(&mut self, raw: &str) -> &str {
        self.value = format_tax_id(raw, self.kind);
        &self.value
    }

    /// Called when focus leaves the field. On an invalid value the field
    /// is cleared and the message to present is returned; a valid or
    /// empty value is left untouched.
    pub fn focus_lost(&mut self) -> Option<String> {
        let validity = validate_tax_id(&self.value);
        if validity.valid {
            None
        } else {
            self.value.clear();
            validity.reason
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_updates_masked_value() {
        let mut field = TaxIdField::new(TaxIdKind::Cpf);
        assert_eq!(field.input_changed("5299"), "529.9");
        assert_eq!(field.input_changed("52998224725"), "529.982.247-25");
        assert_eq!(field.value(), "529.982.247-25");
    }

    #[test]
    fn blur_keeps_valid_value() {
        let mut field = TaxIdField::new(TaxIdKind::Cpf);
        field.input_changed("52998224725");
        assert_eq!(field.focus_lost(), None);
        assert_eq!(field.value(), "529.982.247-25");
    }

    #[test]
    fn blur_clears_invalid_value() {
        let mut field = TaxIdField::new(TaxIdKind::Cpf);
        field.input_changed("52998224726");
        assert_eq!(field.focus_lost(), Some("Invalid CPF".to_string()));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn blur_on_empty_is_fine() {
        let mut field = TaxIdField::new(TaxIdKind::Cnpj);
        assert_eq!(field.focus_lost(), None);
        assert_eq!(field.value(), "");
    }

    #[test]
    fn cnpj_field_masks_and_validates() {
        let mut field = TaxIdField::from_config("cnpj");
        assert_eq!(field.max_length(), 18);
        field.input_changed("11222333000181");
        assert_eq!(field.value(), "11.222.333/0001-81");
        assert_eq!(field.focus_lost(), None);

        field.input_changed("11222333000182");
        assert_eq!(field.focus_lost(), Some("Invalid CNPJ".to_string()));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn host_bound_value_is_remasked() {
        let mut field = TaxIdField::from_config("");
        field.set_value("52998224725");
        assert_eq!(field.value(), "529.982.247-25");
    }
}
