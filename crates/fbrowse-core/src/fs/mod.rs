//! File system abstractions.
//!
//! [`ops`] lists directories, classifies entries and applies single-entry
//! mutations. [`preview`] loads text and image metadata for renderers.

pub mod ops;
pub mod preview;

pub use ops::FileKind;
pub use preview::{ImageInfo, TextPreview};
