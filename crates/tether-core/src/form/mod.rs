//! Form records: the plain value bags the screens collect.
//!
//! All fields are raw user strings. Forms turn themselves into the typed
//! payloads in [`crate::payload`].

mod numbers;
mod record;
mod translate;

pub use numbers::NumberPairForm;
pub use record::RecordForm;
pub use translate::TranslateForm;
