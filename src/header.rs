use anyhow::{Context, Result};
use log::{debug, info};
use regex::Regex;
use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;

use crate::BumpError;
use crate::version::VersionTriple;

/// Matches a full version declaration and captures the quoted content.
fn declaration_regex() -> Result<Regex> {
    Ok(Regex::new(r#"^#define VERSION\s+"([^"]*)""#)?)
}

/// Matches only the declaration marker, independent of what follows it.
///
/// The write step keys off this weaker pattern so that every marker line
/// is rewritten, not just well-formed ones.
fn marker_regex() -> Result<Regex> {
    Ok(Regex::new(r"^#define VERSION\s")?)
}

/// Scans the header for the first version declaration.
///
/// Returns `Ok(None)` when no line carries a declaration; callers decide
/// whether absence is fatal. A declaration whose quoted string does not
/// split into three components is an error.
pub fn read_version(path: impl AsRef<Path>) -> Result<Option<VersionTriple>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read header file {}", path.display()))?;
    let regex = declaration_regex()?;

    for line in contents.lines() {
        if let Some(captures) = regex.captures(line) {
            if let Some(raw) = captures.get(1) {
                let triple = VersionTriple::parse(raw.as_str())?;
                debug!("Found current version: {}", triple);
                return Ok(Some(triple));
            }
        }
    }

    Ok(None)
}

/// Rewrites every declaration line to carry the given version.
///
/// All other lines pass through byte-for-byte, so the output has the same
/// line count as the input. The new contents are staged in a temporary
/// file beside the header and renamed over it, keeping the rewrite
/// atomic; a failure before the rename leaves the header untouched.
pub fn write_version(path: impl AsRef<Path>, version: &VersionTriple) -> Result<()> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path)
        .with_context(|| format!("failed to read header file {}", path.display()))?;
    let regex = marker_regex()?;

    let mut output = String::with_capacity(contents.len());
    let mut replaced = 0usize;
    for line in contents.split_inclusive('\n') {
        if regex.is_match(line) {
            output.push_str(&format!("#define VERSION \"{}\"\n", version));
            replaced += 1;
        } else {
            output.push_str(line);
        }
    }

    if replaced == 0 {
        return Err(BumpError::DeclarationNotFound(path.to_path_buf()).into());
    }
    debug!("Rewriting {} declaration line(s)", replaced);

    let dir = path.parent().filter(|p| !p.as_os_str().is_empty());
    let mut staged = NamedTempFile::new_in(dir.unwrap_or(Path::new(".")))
        .context("failed to create temporary file for header rewrite")?;
    staged
        .write_all(output.as_bytes())
        .context("failed to write staged header contents")?;
    staged
        .persist(path)
        .map_err(|e| e.error)
        .with_context(|| format!("failed to replace header file {}", path.display()))?;

    info!("Version file updated: {}", version);
    Ok(())
}
