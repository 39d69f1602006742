//! Vocabularies per language
//!
//! Word lists are plain text, one word per line. The lists under
//! `data/vocab` are compiled into the binary; a directory with the same file
//! names can be used instead at runtime.

mod embedded;
mod language;
pub mod loader;
mod store;
mod vocabulary;

pub use embedded::embedded_list;
pub use language::{Language, ListVariant};
pub use loader::{DirectorySource, EmbeddedSource, Lexicon, VocabularySource};
pub use store::{FetchTicket, LanguageStore};
pub use vocabulary::Vocabulary;
