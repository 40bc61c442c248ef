use clap::Parser;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{dungeon::EdgeType, error::GridError};

/// Random tile dungeon generator
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Number of tile columns
    #[arg(long, default_value_t = 5)]
    pub width: usize,

    /// Number of tile rows
    #[arg(long, default_value_t = 5)]
    pub height: usize,

    /// Random seed
    #[arg(long)]
    pub seed: Option<u64>,

    /// Use this edge type (`wall` or `door`) for every edge instead of random ones
    #[arg(long)]
    pub fill: Option<String>,
}

impl Args {
    pub fn fill_edge(&self) -> Result<Option<EdgeType>, GridError> {
        self.fill.as_deref().map(str::parse::<EdgeType>).transpose()
    }

    pub fn rng(&self) -> ChaCha8Rng {
        self.seed
            .map_or_else(ChaCha8Rng::from_entropy, ChaCha8Rng::seed_from_u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn defaults() {
        let args = Args::try_parse_from(["tile-dungeon"]).unwrap();
        assert_eq!((args.width, args.height), (5, 5));
        assert_eq!(args.seed, None);
        assert_eq!(args.fill_edge(), Ok(None));
    }

    #[test]
    fn fill_is_validated() {
        let args = Args::try_parse_from(["tile-dungeon", "--fill", "Door"]).unwrap();
        assert_eq!(args.fill_edge(), Ok(Some(EdgeType::Door)));

        let args = Args::try_parse_from(["tile-dungeon", "--fill", "lava"]).unwrap();
        assert_eq!(
            args.fill_edge(),
            Err(GridError::Validation {
                value: "lava".to_owned()
            })
        );
    }

    #[test]
    fn seed_makes_rng_repeatable() {
        let args =
            Args::try_parse_from(["tile-dungeon", "--seed", "42", "--width", "3"]).unwrap();
        assert_eq!(args.width, 3);
        assert_eq!(args.rng().gen::<u64>(), args.rng().gen::<u64>());
    }
}
