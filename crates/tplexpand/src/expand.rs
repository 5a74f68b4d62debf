//! Expand command - stdin to stdout filter

use anyhow::Result;
use log::debug;
use std::io::{self, BufWriter};
use tplexpand_core::Expander;

/// Run the expander over the process's standard streams
///
/// Errors are returned as-is so `main` can tell a protocol diagnostic from
/// an I/O failure.
pub fn run() -> Result<()> {
    let stdin = io::stdin().lock();
    let stdout = BufWriter::new(io::stdout().lock());

    let store = Expander::new().run(stdin, stdout)?;
    debug!("defined templates: {:?}", store.names());
    Ok(())
}
