//! CLI command structure using clap

use clap::Parser;

/// Reads stdin, writes stdout; no options beyond --help and --version
#[derive(Parser)]
#[command(name = "tplexpand")]
#[command(version, about, long_about = None)]
pub struct Cli {}
