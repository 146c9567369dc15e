//! fusetool - merge two 2D images into a 3D voxel model
//!
//! Writes `<output>.obj` and `<output>.mtl`.

mod cli;
mod config;

use anyhow::Context;
use clap::Parser;
use cli::Cli;
use config::FuseConfig;
use crossworld_fuse::{fuse_files, FuseError};
use std::path::Path;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let file_config = match &cli.config {
        Some(path) => load_config(path)?,
        None => FuseConfig::default(),
    };
    let options = cli.apply_to(file_config).to_options();
    tracing::debug!(?options, "resolved options");

    let summary =
        fuse_files(&cli.image_a, &cli.image_b, &cli.output, &options).map_err(stage_report)?;

    println!(
        "Wrote {} points ({} vertices, {} faces, {} materials) → {}.obj",
        summary.points,
        summary.vertices,
        summary.faces,
        summary.materials,
        cli.output.display()
    );

    Ok(())
}

fn load_config(path: &Path) -> anyhow::Result<FuseConfig> {
    FuseConfig::load(path).with_context(|| format!("Failed to load config {}", path.display()))
}

/// Wrap a pipeline error with the stage (decode or write) that failed
fn stage_report(err: FuseError) -> anyhow::Error {
    let stage = err.stage();
    anyhow::Error::new(err).context(format!("{} stage failed", stage))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossworld_fuse::Stage;
    use tempfile::TempDir;

    #[test]
    fn test_stage_context_in_report() {
        let err = FuseError::Write {
            path: "out/model.obj".into(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such directory"),
        };
        assert_eq!(err.stage(), Stage::Write);

        let text = format!("{:#}", stage_report(err));
        assert!(text.starts_with("write stage failed"));
        assert!(text.contains("out/model.obj"));
    }

    #[test]
    fn test_bad_config_names_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("broken.toml");
        std::fs::write(&path, "pairing = 7\n").unwrap();

        let text = format!("{:#}", load_config(&path).unwrap_err());
        assert!(text.starts_with("Failed to load config"));
        assert!(text.contains("broken.toml"));
    }
}
