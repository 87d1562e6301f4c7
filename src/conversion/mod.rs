//! CSON to JSON conversion module
//!
//! The engine is one single-pass scanner; the sub-scanners it leans on and
//! the streaming adapter live alongside it here.

pub mod engine;
pub mod stream;

mod scan;

pub use engine::{to_json, to_json_string};
pub use stream::ConvertingReader;
