use anyhow::Result;
use log::debug;
use std::io::Write;
use std::path::PathBuf;

use crate::BumpError;
use crate::header;
use crate::output;
use crate::version::VersionTriple;

/// Runs the full read, increment, rewrite, report sequence against a
/// fixed header path.
pub struct VersionBumper {
    header_path: PathBuf,
}

impl VersionBumper {
    pub fn new(header_path: impl Into<PathBuf>) -> Self {
        VersionBumper {
            header_path: header_path.into(),
        }
    }

    /// Bumps the patch component once and reports the result to the sink.
    ///
    /// An absent declaration is fatal; the header is left unmodified.
    /// Each call mutates the header, so repeated calls keep counting up.
    pub fn bump(&self, sink: &mut dyn Write) -> Result<VersionTriple> {
        let current = header::read_version(&self.header_path)?
            .ok_or_else(|| BumpError::DeclarationNotFound(self.header_path.clone()))?;

        let next = current.bump_patch();
        debug!("Incrementing version from {} -> {}", current, next);

        header::write_version(&self.header_path, &next)?;
        output::write_outputs(sink, &next)?;

        Ok(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_bump_reports_new_triple() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.h");
        fs::write(&path, "#define VERSION \"0.3.7\"\n").unwrap();

        let mut sink: Vec<u8> = Vec::new();
        let bumper = VersionBumper::new(&path);
        let next = bumper.bump(&mut sink).unwrap();

        assert_eq!(next.to_string(), "0.3.8");
        assert_eq!(
            String::from_utf8(sink).unwrap(),
            "version=0.3.8\nmajor=0\nminor=3\npatch=8\n"
        );
    }

    #[test]
    fn test_bump_missing_declaration_leaves_file_alone() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("version.h");
        let original = "#define NOT_VERSION \"1.0.0\"\n";
        fs::write(&path, original).unwrap();

        let mut sink: Vec<u8> = Vec::new();
        let bumper = VersionBumper::new(&path);
        let result = bumper.bump(&mut sink);

        assert!(result.is_err());
        assert_eq!(fs::read_to_string(&path).unwrap(), original);
        assert!(sink.is_empty());
    }
}
