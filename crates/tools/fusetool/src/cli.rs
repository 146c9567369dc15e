//! Command line arguments for fusetool

use crate::config::{FuseConfig, PairingMode};
use clap::Parser;
use std::path::PathBuf;

/// Parse RGB color string (e.g., "255,255,255")
pub fn parse_rgb_color(s: &str) -> Result<[u8; 3], String> {
    let parts: Vec<&str> = s.split(',').collect();
    if parts.len() != 3 {
        return Err("Color must be in format 'R,G,B' (e.g., '255,255,255')".to_string());
    }

    let mut rgb = [0u8; 3];
    for (channel, (part, name)) in rgb.iter_mut().zip(parts.iter().zip(["red", "green", "blue"])) {
        *channel = part
            .trim()
            .parse()
            .map_err(|_| format!("Invalid {} value: {}", name, part))?;
    }
    Ok(rgb)
}

#[derive(Parser, Debug)]
#[command(name = "fusetool")]
#[command(
    version,
    about = "Fuse two orthogonal images into a voxel OBJ/MTL model"
)]
pub struct Cli {
    /// Image supplying the X axis (front view)
    pub image_a: PathBuf,

    /// Image supplying the Z axis (side view)
    pub image_b: PathBuf,

    /// Output base path; `.obj` and `.mtl` are appended
    pub output: PathBuf,

    /// TOML configuration file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Background color excluded from the model (e.g., "255,255,255")
    #[arg(short, long, value_parser = parse_rgb_color)]
    pub background: Option<[u8; 3]>,

    /// Pair pixels in scan order instead of shuffling
    #[arg(long, conflicts_with = "seed")]
    pub ordered: bool,

    /// Random seed for reproducible shuffled pairing
    #[arg(short, long)]
    pub seed: Option<u64>,
}

impl Cli {
    /// Override `config` with any flags given on the command line
    pub fn apply_to(&self, mut config: FuseConfig) -> FuseConfig {
        if let Some(background) = self.background {
            config.background = background;
        }

        if self.ordered {
            config.pairing = PairingMode::Ordered;
        }

        if let Some(seed) = self.seed {
            config.pairing = PairingMode::Shuffled;
            config.seed = Some(seed);
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossworld_fuse::Pairing;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("fusetool").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_positionals_only() {
        let cli = parse(&["a.png", "b.png", "out/model"]);
        assert_eq!(cli.image_a, PathBuf::from("a.png"));
        assert_eq!(cli.output, PathBuf::from("out/model"));
        assert_eq!(cli.apply_to(FuseConfig::default()), FuseConfig::default());
    }

    #[test]
    fn test_missing_output_is_rejected() {
        assert!(Cli::try_parse_from(["fusetool", "a.png", "b.png"]).is_err());
    }

    #[test]
    fn test_flags_override_config() {
        let file = FuseConfig {
            background: [1, 2, 3],
            pairing: PairingMode::Shuffled,
            seed: Some(9),
        };
        let cli = parse(&["a.png", "b.png", "out", "--background", "0, 0, 0", "--ordered"]);
        let config = cli.apply_to(file);

        assert_eq!(config.background, [0, 0, 0]);
        assert_eq!(config.to_options().pairing, Pairing::Ordered);
    }

    #[test]
    fn test_seed_selects_seeded_shuffle() {
        let file = FuseConfig {
            pairing: PairingMode::Ordered,
            ..FuseConfig::default()
        };
        let cli = parse(&["a.png", "b.png", "out", "--seed", "77"]);
        assert_eq!(cli.apply_to(file).to_options().pairing, Pairing::Seeded(77));
    }

    #[test]
    fn test_ordered_and_seed_conflict() {
        let result =
            Cli::try_parse_from(["fusetool", "a.png", "b.png", "out", "--ordered", "--seed", "1"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_parse_rgb_color() {
        assert_eq!(parse_rgb_color("255,0,10"), Ok([255, 0, 10]));
        assert!(parse_rgb_color("255,0").is_err());
        assert!(parse_rgb_color("256,0,0").is_err());
        assert!(parse_rgb_color("a,b,c").is_err());
    }
}
