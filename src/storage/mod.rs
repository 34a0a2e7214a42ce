pub mod document;

pub use document::{JsonDocument, WriteGuard};
