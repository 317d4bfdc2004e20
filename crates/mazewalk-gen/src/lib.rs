//! Random maze generation for mazewalk.
//!
//! [`MapGen`] fills a grid by scattering obstacles or by carving random
//! walks from the entrance, and can wall off whatever the entrance cannot
//! reach. Generators take any [`rand::Rng`], so a seeded RNG reproduces the
//! same maze.

pub mod mapgen;

#[cfg(test)]
mod props;

pub use mapgen::{DownhillWalker, FourDirectionWalker, MapGen, ObstacleRule, RandomWalker};
