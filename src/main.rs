use std::process;

use clap::Parser;

use csonconv::cli::{self, Args};

fn main() {
    let args = Args::parse();
    if let Err(err) = cli::run(&args) {
        eprintln!("error: {err}");
        process::exit(1);
    }
}
