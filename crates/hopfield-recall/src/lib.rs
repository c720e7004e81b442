//! # Hopfield Recall
//!
//! Minimal associative-memory recall engine built on a single-pattern
//! Hopfield network:
//! - Grid ⇄ bipolar vector codec
//! - One-shot Hebbian training (outer product, zero diagonal)
//! - Sign-flip noise injection with an injectable random source
//! - Synchronous recall iterated to a fixed point or an iteration budget
//! - Agreement scoring between recalled and ideal patterns
//!
//! ## Example
//!
//! ```rust
//! use hopfield_recall::codec::{decode, encode, Grid};
//! use hopfield_recall::noise::NoiseInjector;
//! use hopfield_recall::scorer::agreement;
//! use hopfield_recall::AssociativeMemory;
//!
//! let grid = Grid::from_lines(&[
//!     "........",
//!     ".######.",
//!     ".#....#.",
//!     ".#....#.",
//!     ".#....#.",
//!     ".#....#.",
//!     ".######.",
//!     "........",
//! ])
//! .unwrap();
//!
//! let ideal = encode(&grid).unwrap();
//! let mut memory = AssociativeMemory::new(ideal.len()).unwrap();
//! memory.train(&ideal).unwrap();
//!
//! let noisy = NoiseInjector::seeded(42).apply(&ideal, 0.08).unwrap();
//! let recovered = memory.recall(&noisy, 50).unwrap();
//!
//! assert_eq!(agreement(&ideal, &recovered).unwrap(), 1.0);
//! assert_eq!(decode(&recovered, 8, 8).unwrap(), grid);
//! ```
//!
//! ## Features
//!
//! - `parallel`: compute each round's local fields with rayon. Results are
//!   identical to the sequential path.

pub mod codec;
pub mod config;
pub mod error;
pub mod memory;
pub mod noise;
pub mod pipeline;
pub mod scorer;
pub mod vector;

pub use codec::{decode, encode, Cell, Grid};
pub use config::RecallConfig;
pub use error::{RecallError, Result};
pub use memory::{AssociativeMemory, RecallOutcome, WeightMatrix};
pub use noise::{apply_noise, NoiseInjector};
pub use pipeline::{RecallPipeline, RecallReport};
pub use scorer::{agreement, hamming_distance};
pub use vector::BipolarVector;
