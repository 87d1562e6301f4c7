//! CSON (Compact Simple Object Notation) Converter
//!
//! Converts the relaxed, indentation-sensitive CSON notation, a JSON
//! superset with comments, unquoted keys and values, and
//! indentation-implied object nesting, into valid JSON text, as a library
//! and as a small pipe-friendly CLI.
//!
//! ```
//! let json = csonconv::to_json_string("name: widget\ncount: 3\n");
//! assert_eq!(json, r#"{"name":"widget","count":3}"#);
//! ```
//!
//! Conversion never fails; strict callers decode the output instead:
//!
//! ```
//! use serde::Deserialize;
//!
//! #[derive(Deserialize)]
//! struct Widget {
//!     name: String,
//!     count: u32,
//! }
//!
//! let widget: Widget = csonconv::from_str("name: widget\ncount: 3\n").unwrap();
//! assert_eq!(widget.name, "widget");
//! assert_eq!(widget.count, 3);
//! ```

pub mod cli;
pub mod conversion;
pub mod error;

// Re-export the conversion surface
pub use conversion::{to_json, to_json_string, ConvertingReader};
pub use error::{DecodeError, DecodeResult, InputError};

use serde::de::DeserializeOwned;

/// Convert a CSON document and decode the resulting JSON into `T`.
///
/// The decode failure is the only error signal: the conversion itself is
/// total, so malformed input surfaces here as output that is not valid
/// JSON or does not fit `T`.
pub fn from_slice<T: DeserializeOwned>(input: &[u8]) -> DecodeResult<T> {
    let json = conversion::to_json(input);
    serde_json::from_slice(&json).map_err(DecodeError::from)
}

/// Convert a CSON document in a `&str` and decode the result into `T`.
pub fn from_str<T: DeserializeOwned>(input: &str) -> DecodeResult<T> {
    from_slice(input.as_bytes())
}
