//! cadastro-ids: Formatting and validation for Brazilian taxpayer identifiers.
//!
//! Covers the two registry numbers issued by the Receita Federal:
//! - CPF (Cadastro de Pessoas Físicas), 11 digits, masked `000.000.000-00`
//! - CNPJ (Cadastro Nacional da Pessoa Jurídica), 14 digits, masked `00.000.000/0000-00`
//!
//! Both carry two trailing check digits computed by weighted sums modulo 11.
//! Everything here is a pure function of its arguments: masks are recomputed
//! from the stripped digits on every call, and validation never mutates or
//! throws — an invalid identifier is a normal return value, not an error.

#[cfg(feature = "native")]
uniffi::setup_scaffolding!();

pub mod extract;
pub mod field;
pub mod format;
pub mod kind;
pub mod validate;

pub use extract::*;
pub use field::*;
pub use format::*;
pub use kind::*;
pub use validate::*;
