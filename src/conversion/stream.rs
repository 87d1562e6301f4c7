//! Streaming adapter over the conversion engine.
//!
//! Conversion itself is not incremental: the adapter buffers the whole
//! upstream source on the first read, converts once, and then serves the
//! converted bytes out of an in-memory cursor.

use std::io::{self, Cursor, Read};

use crate::conversion::engine::to_json;

/// A reader that yields the JSON conversion of an upstream CSON source.
///
/// ```
/// use std::io::Read;
/// use csonconv::ConvertingReader;
///
/// let mut reader = ConvertingReader::new("a: 1".as_bytes());
/// let mut json = String::new();
/// reader.read_to_string(&mut json).unwrap();
/// assert_eq!(json, r#"{"a":1}"#);
/// ```
pub struct ConvertingReader<R> {
    upstream: Option<R>,
    converted: Cursor<Vec<u8>>,
}

impl<R: Read> ConvertingReader<R> {
    pub fn new(upstream: R) -> Self {
        ConvertingReader {
            upstream: Some(upstream),
            converted: Cursor::new(Vec::new()),
        }
    }
}

impl<R: Read> Read for ConvertingReader<R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if let Some(upstream) = self.upstream.as_mut() {
            let mut raw = Vec::new();
            upstream.read_to_end(&mut raw)?;
            self.converted = Cursor::new(to_json(&raw));
            // dropped only after a full successful buffering, so a failed
            // read can be retried
            self.upstream = None;
        }
        self.converted.read(buf)
    }
}
