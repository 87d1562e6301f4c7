//! Core conversion engine for CSON to JSON transformation
//!
//! One forward scan over the source bytes tokenizes the input, infers
//! object structure from indentation, and re-emits canonical JSON
//! punctuation. No parse tree is built and the scan never backtracks; all
//! bookkeeping lives in one [`Scanner`] owned for the duration of a single
//! conversion, so separate conversions can run in parallel freely.

use std::cmp::Ordering;

use crate::conversion::scan::{comment_len, is_keyword, scan_string, scan_word};

/// `current_indent` value once a bare word has claimed the structural
/// decision for its line. Later whitespace on the same line is not
/// indentation; the counter only re-arms at the next line break.
const INDENT_USED: i64 = -1;

/// Convert a CSON document to JSON text.
///
/// Total over all byte sequences: malformed input degrades to best-effort
/// output instead of an error. Callers that need a strict guarantee decode
/// the result with a JSON parser, see [`crate::from_slice`].
pub fn to_json(src: &[u8]) -> Vec<u8> {
    let mut scanner = Scanner::new(src);
    // A document that already opens with an explicit `{` or `[` is not
    // wrapped again; everything else becomes the body of one implicit
    // top-level object.
    let wrap = !has_explicit_root(src);
    if wrap {
        scanner.out.push(b'{');
    }
    scanner.scan();
    for _ in 0..scanner.nest_depth {
        scanner.out.push(b'}');
    }
    if wrap {
        scanner.out.push(b'}');
    }
    scanner.out
}

/// Convert a CSON document to a JSON `String`.
///
/// The engine only inserts ASCII punctuation and never splits multi-byte
/// sequences, so valid UTF-8 input converts losslessly.
pub fn to_json_string(src: &str) -> String {
    String::from_utf8_lossy(&to_json(src.as_bytes())).into_owned()
}

/// True when the first significant byte (past whitespace and comments) is
/// an explicit `{` or `[`.
fn has_explicit_root(src: &[u8]) -> bool {
    let mut i = 0;
    while i < src.len() {
        match src[i] {
            b' ' | b'\t' | b'\n' | b'\r' => i += 1,
            b'#' => i += comment_len(&src[i..]),
            b'{' | b'[' => return true,
            _ => return false,
        }
    }
    false
}

/// Scan state for one conversion pass.
struct Scanner<'a> {
    src: &'a [u8],
    cursor: usize,
    /// Open implicit objects inferred from indentation. The top-level
    /// wrapper is accounted for separately by [`to_json`].
    nest_depth: usize,
    /// Leading whitespace seen on the current line, or [`INDENT_USED`].
    current_indent: i64,
    /// Indentation column of the most recent structural bare-word line.
    last_indent: i64,
    /// Whether a comma is owed before the next value or opener.
    pending_comma: bool,
    out: Vec<u8>,
}

impl<'a> Scanner<'a> {
    fn new(src: &'a [u8]) -> Self {
        Scanner {
            src,
            cursor: 0,
            nest_depth: 0,
            current_indent: 0,
            last_indent: 0,
            pending_comma: false,
            out: Vec::with_capacity(src.len() + 16),
        }
    }

    /// Runs the tokenizer dispatch loop to end of input. Sub-scanners may
    /// report a consumed length that steps past the end; the loop bound
    /// check absorbs that.
    fn scan(&mut self) {
        while let Some(&byte) = self.src.get(self.cursor) {
            match byte {
                b' ' | b'\t' => {
                    self.cursor += 1;
                    if self.current_indent != INDENT_USED {
                        self.current_indent += 1;
                    }
                }
                b'\n' | b'\r' => {
                    self.cursor += 1;
                    self.current_indent = 0;
                }
                b'#' => {
                    self.cursor += comment_len(&self.src[self.cursor..]);
                }
                b':' => {
                    // a value follows its key without a comma
                    self.pending_comma = false;
                    self.out.push(b':');
                    self.cursor += 1;
                }
                b'{' | b'[' => {
                    if self.pending_comma {
                        self.out.push(b',');
                    }
                    self.pending_comma = false;
                    self.out.push(byte);
                    self.cursor += 1;
                }
                b'}' | b']' => {
                    // a sibling may follow the closer
                    self.pending_comma = true;
                    self.out.push(byte);
                    self.cursor += 1;
                }
                b',' => {
                    // never emitted directly; the next value or closer
                    // decides, which is what suppresses trailing commas
                    self.pending_comma = true;
                    self.cursor += 1;
                }
                b'\'' | b'"' => self.quoted(),
                b'+' | b'-' | b'0'..=b'9' => self.number(),
                _ => self.bare_word(),
            }
        }
    }

    /// Emits the owed comma, if any, and leaves the flag armed for
    /// whatever follows the value about to be written.
    fn comma_before_value(&mut self) {
        if self.pending_comma {
            self.out.push(b',');
        }
        self.pending_comma = true;
    }

    fn quoted(&mut self) {
        self.comma_before_value();
        let (content, consumed) = scan_string(&self.src[self.cursor..]);
        self.out.push(b'"');
        self.out.extend_from_slice(&content);
        self.out.push(b'"');
        self.cursor += consumed;
    }

    fn number(&mut self) {
        self.comma_before_value();
        let word = scan_word(&self.src[self.cursor..]);
        self.push_word(word, !parses_as_number(word));
        self.cursor += word.len();
    }

    /// The default branch: structural inference, then the word itself.
    fn bare_word(&mut self) {
        let word = scan_word(&self.src[self.cursor..]);
        // a form feed reaches this branch but trims out of the word; the
        // empty word is stepped over so the cursor always advances
        if word.is_empty() {
            self.cursor += 1;
            return;
        }
        if self.current_indent != INDENT_USED {
            match self.current_indent.cmp(&self.last_indent) {
                Ordering::Less => {
                    // exactly one level closes, however deep the dedent;
                    // the owed comma rides on pending_comma like any closer.
                    // With nothing open the close is skipped so the output
                    // stays brace-balanced.
                    if self.nest_depth > 0 {
                        self.nest_depth -= 1;
                        self.out.push(b'}');
                        self.pending_comma = true;
                    }
                    self.last_indent = self.current_indent;
                }
                Ordering::Equal => {
                    // sibling at the same level, nothing structural
                }
                Ordering::Greater => {
                    if self.pending_comma {
                        self.out.push(b',');
                    }
                    self.pending_comma = false;
                    self.nest_depth += 1;
                    self.out.push(b'{');
                    self.last_indent = self.current_indent;
                }
            }
        }
        self.current_indent = INDENT_USED;
        self.comma_before_value();
        self.push_word(word, !is_keyword(word));
        self.cursor += word.len();
    }

    fn push_word(&mut self, word: &[u8], quote: bool) {
        if quote {
            self.out.push(b'"');
        }
        self.out.extend_from_slice(word);
        if quote {
            self.out.push(b'"');
        }
    }
}

/// Numbers are whatever a 64-bit float parse accepts as a finite value.
/// Overflowing literals like `1e400` saturate to infinity, which JSON
/// cannot represent bare, so they fall back to quoted strings along with
/// everything else that fails to parse.
fn parses_as_number(word: &[u8]) -> bool {
    std::str::from_utf8(word).is_ok_and(|w| w.parse::<f64>().is_ok_and(|v| v.is_finite()))
}
