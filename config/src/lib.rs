//! # Config Crate
//!
//! Centralized configuration constants for the DFM risk pipeline.
//! Every detection threshold, rule weight, context default and timeout is
//! defined here so the classifier, aggregator and fusion layers agree on
//! the same numbers.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEGENERATE_EDGE_LENGTH, THIN_WALL_EDGE_LENGTH};
//!
//! let edge = 0.2;
//! let degenerate = edge < DEGENERATE_EDGE_LENGTH;
//! let thin = edge < THIN_WALL_EDGE_LENGTH;
//! assert!(!degenerate && thin);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **Pure Data**: No I/O, no global state
//! - **Validated Tunables**: Runtime knobs go through [`FusionConfig::new`]

pub mod constants;
pub mod fusion;

pub use fusion::{ConfigError, FusionConfig};
