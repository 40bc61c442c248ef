#![warn(clippy::all, clippy::pedantic, clippy::nursery)]
#![allow(clippy::missing_errors_doc)]

pub mod config;
pub mod dungeon;
pub mod error;
pub mod render;

pub use dungeon::{generate_random, normalize, Dungeon, EdgeType, Grid, Position, Shape, Tile};
pub use error::GridError;
pub use render::render;
