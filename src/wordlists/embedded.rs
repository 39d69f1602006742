//! Embedded vocabularies
//!
//! Word lists compiled into the binary at build time.

use super::{Language, ListVariant};

// Include generated word lists from build script
include!(concat!(env!("OUT_DIR"), "/vocab.rs"));

/// Raw embedded lines for a language and list variant
#[must_use]
pub const fn embedded_list(language: Language, variant: ListVariant) -> &'static [&'static str] {
    match (language, variant) {
        (Language::PtBr, ListVariant::Full) => PT_BR,
        (Language::PtBr, ListVariant::Common) => PT_BR_COMMON,
        (Language::EnUs, ListVariant::Full) => EN_US,
        (Language::EnUs, ListVariant::Common) => EN_US_COMMON,
        (Language::Fr, ListVariant::Full) => FR,
        (Language::Fr, ListVariant::Common) => FR_COMMON,
    }
}
