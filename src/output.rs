use anyhow::{Context, Result};
use log::debug;
use std::env;
use std::fs::{File, OpenOptions};
use std::io::Write;

use crate::version::VersionTriple;

/// Appends the four pipeline output lines for the given version.
///
/// Keys are emitted in a fixed order so downstream steps can rely on it:
/// `version`, `major`, `minor`, `patch`.
pub fn write_outputs(sink: &mut dyn Write, version: &VersionTriple) -> Result<()> {
    writeln!(sink, "version={}", version)?;
    writeln!(sink, "major={}", version.major)?;
    writeln!(sink, "minor={}", version.minor)?;
    writeln!(sink, "patch={}", version.patch)?;
    Ok(())
}

/// Opens the output file named by the given environment variable in
/// append mode, creating it if needed.
pub fn open_env_sink(var: &str) -> Result<File> {
    let path =
        env::var(var).with_context(|| format!("environment variable {} is not set", var))?;
    debug!("Appending pipeline outputs to {}", path);
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open output sink {}", path))
}
