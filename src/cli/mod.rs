//! Command-line interface module
//!
//! The binary mirrors a classic pipe filter: piped standard input wins,
//! otherwise a single positional file path is required. Converted JSON goes
//! to standard output with no trailing framing.

use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::Parser;

use crate::conversion::to_json;
use crate::error::InputError;

/// Main CLI arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "csonconv")]
#[command(about = "Convert CSON (Compact Simple Object Notation) to JSON")]
#[command(version = "0.1.0")]
#[command(long_about = None)]
pub struct Args {
    /// Input CSON file (omitted when input is piped on stdin)
    #[arg()]
    pub file: Option<PathBuf>,
}

/// Entry point used by the binary: resolve the input bytes, convert, and
/// write the JSON document to stdout.
pub fn run(args: &Args) -> anyhow::Result<()> {
    let data = read_pipe_or_file(args.file.as_deref(), atty::is(atty::Stream::Stdin))?;
    let json = to_json(&data);
    let mut stdout = io::stdout().lock();
    stdout.write_all(&json)?;
    stdout.flush()?;
    Ok(())
}

/// Reads piped standard input when present, otherwise the given file.
///
/// `stdin_is_tty` is passed in by the caller (the binary asks atty) so the
/// file and no-input paths stay testable without a terminal.
pub fn read_pipe_or_file(file: Option<&Path>, stdin_is_tty: bool) -> Result<Vec<u8>, InputError> {
    if !stdin_is_tty {
        let mut buffer = Vec::new();
        io::stdin()
            .read_to_end(&mut buffer)
            .map_err(|source| InputError::Stdin { source })?;
        return Ok(buffer);
    }
    match file {
        Some(path) => fs::read(path).map_err(|source| InputError::File {
            path: path.to_path_buf(),
            source,
        }),
        None => Err(InputError::NoInput),
    }
}
