use std::path::PathBuf;
use thiserror::Error;

pub mod bumper;
pub mod header;
pub mod output;
pub mod version;

#[derive(Debug, Error)]
pub enum BumpError {
    #[error("no version declaration found in {}", .0.display())]
    DeclarationNotFound(PathBuf),
    #[error("malformed version string {0:?}: expected exactly three dot-separated components")]
    MalformedVersion(String),
}
