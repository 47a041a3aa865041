use anyhow::Result;
use log::{LevelFilter, info};
use version_bumper::{bumper::VersionBumper, output};

/// Location of the version declaration, relative to the working directory.
const HEADER_PATH: &str = "include/version.h";
/// Environment variable naming the pipeline output file.
const OUTPUT_ENV_VAR: &str = "GITHUB_OUTPUT";

fn main() -> Result<()> {
    pretty_env_logger::env_logger::builder()
        .filter_level(LevelFilter::Info)
        .format_timestamp(None)
        .parse_default_env()
        .init();

    // Acquire the sink before touching the header so a bad sink path
    // fails the run without bumping the version.
    let mut sink = output::open_env_sink(OUTPUT_ENV_VAR)?;

    let bumper = VersionBumper::new(HEADER_PATH);
    let version = bumper.bump(&mut sink)?;

    info!("New version created: {}", version);
    Ok(())
}
