//! Byte-level sub-scanners for the conversion engine: comments, quoted
//! strings, and delimiter-terminated bare words.
//!
//! Each scanner takes the remaining source slice starting at the byte that
//! selected it and reports how many bytes it consumed; the engine owns the
//! cursor. None of them can fail: malformed input runs to end-of-input.

/// Bytes that end a bare word.
pub(crate) fn is_delimiter(byte: u8) -> bool {
    matches!(byte, b':' | b'}' | b']' | b',' | b'\n' | b'#')
}

/// The three literals that stay unquoted in the output.
pub(crate) fn is_keyword(word: &[u8]) -> bool {
    matches!(word, b"true" | b"false" | b"null")
}

/// Scans a bare word up to the next delimiter and trims surrounding ASCII
/// whitespace. The caller advances by the returned length, so trimmed
/// trailing whitespace is rescanned as ordinary input. With no delimiter
/// left, the raw tail is returned untrimmed.
pub(crate) fn scan_word(s: &[u8]) -> &[u8] {
    match s.iter().position(|&b| is_delimiter(b)) {
        Some(end) => s[..end].trim_ascii(),
        None => s,
    }
}

/// Length of the comment starting at `s[0] == b'#'`.
///
/// A head line shorter than 4 bytes (newline included), a second or third
/// byte that is not `#`, or a fourth byte that is `#` all mean a
/// single-line comment running up to its newline, which stays unconsumed.
/// Exactly `###` followed by anything else opens a block comment that runs
/// through the next `###`. Either form runs to end-of-input when its
/// terminator is missing.
pub(crate) fn comment_len(s: &[u8]) -> usize {
    let newline = s.iter().position(|&b| b == b'\n');
    let head_len = newline.map_or(s.len(), |i| i + 1);
    if head_len < 4 || s[1] != b'#' || s[2] != b'#' || s[3] == b'#' {
        return newline.unwrap_or(s.len());
    }
    match find_triple(&s[4..], b'#') {
        Some(end) => 4 + end + 3,
        None => s.len(),
    }
}

/// Scans a quoted string starting at `s[0]` (`'` or `"`). Returns the
/// content rewritten for JSON embedding and the number of source bytes
/// consumed. The engine emits the content inside plain double quotes
/// regardless of the source quote character.
pub(crate) fn scan_string(s: &[u8]) -> (Vec<u8>, usize) {
    let quote = s[0];
    if s.len() > 3 && s[1] == quote && s[2] == quote {
        return scan_triple_quoted(s, quote);
    }

    let mut end = 1;
    while end < s.len() && s[end] != quote {
        // a backslash shields the next byte from ending the scan; both
        // bytes pass through untouched
        if s[end] == b'\\' && end + 1 < s.len() {
            end += 1;
        }
        end += 1;
    }

    let mut content = Vec::with_capacity(end - 1);
    for &byte in &s[1..end] {
        if byte == b'\n' {
            content.extend_from_slice(b"\\n");
        } else {
            content.push(byte);
        }
    }
    // one past the closing quote; on unterminated input this overshoots
    // end-of-input and the scan loop stops
    (content, end + 1)
}

fn scan_triple_quoted(s: &[u8], quote: u8) -> (Vec<u8>, usize) {
    let interior = &s[3..];
    let (raw, consumed) = match find_triple(interior, quote) {
        // consume through the closing delimiter; the newline after it stays
        // in the source so the indent counter re-arms for the next line
        Some(end) => (&interior[..end], end + 6),
        None => (interior, s.len()),
    };
    (dedent(raw), consumed)
}

/// Dedent normalization for a triple-quoted interior: the boundary newlines
/// and the closing delimiter's own indentation go away, every line loses
/// the common leading-space run, and the lines are rejoined with the
/// literal escape pair `\n`.
fn dedent(raw: &[u8]) -> Vec<u8> {
    let mut content = raw;
    if content.first() == Some(&b'\n') {
        content = &content[1..];
    }
    if let Some(last_newline) = content.iter().rposition(|&b| b == b'\n') {
        if content[last_newline + 1..].iter().all(|&b| b == b' ') {
            content = &content[..last_newline];
        }
    }

    let lines: Vec<&[u8]> = content.split(|&b| b == b'\n').collect();
    // lines of nothing but spaces do not constrain the common indent
    let mut min_indent = content.len();
    for line in &lines {
        if let Some(text_start) = line.iter().position(|&b| b != b' ') {
            min_indent = min_indent.min(text_start);
        }
    }

    let mut out = Vec::with_capacity(content.len());
    for (i, line) in lines.iter().enumerate() {
        if i > 0 {
            out.extend_from_slice(b"\\n");
        }
        out.extend_from_slice(line.get(min_indent..).unwrap_or_default());
    }
    out
}

fn find_triple(s: &[u8], byte: u8) -> Option<usize> {
    let needle = [byte; 3];
    s.windows(3).position(|window| window == needle)
}
