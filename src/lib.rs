//! # Corridor: final-position distributions for a 1-D robot with noisy sensing
//!
//! Models a robot walking a finite track of alternating window/wall squares.
//! Each time tick it samples an intended step size from a discrete movement
//! table, then perceives every square it would cross through a noisy sensor;
//! the first square perceived as a wall halts it for that tick. Position
//! `boundary` is absorbing.
//!
//! The crate computes the distribution over final positions two ways, and the
//! two must agree in expectation:
//!
//! | Path | Entry point | Rust module | Description |
//! |------|-------------|-------------|-------------|
//! | Empirical | [`engine::run_empirical`] | [`engine`] | Run N independent trials off one seeded RNG stream, tally final positions into a normalized histogram |
//! | Exact | [`exact::run_exact`] | [`exact`] | Forward dynamic program: build the per-tick transition matrix once, push a dense distribution through `steps` ticks |
//!
//! ## Model pieces
//!
//! - [`track`]: square labels, a pure function of position (window iff even)
//! - [`perception`]: noisy label sensing, one RNG draw per square
//! - [`movement`]: categorical step-size sampling via cumulative inversion
//! - [`belief`]: the output distribution type and its summary statistics
//! - [`presets`]: the six stock movement/sensor scenarios
//!
//! ## Geometry convention
//!
//! Positions index the near edges of unit squares: square `s` spans
//! `s..s+1` and carries `track::label_at(s)`. A robot at position `p`
//! stepping `d` crosses squares `p..min(p + d, boundary)` in increasing
//! order; the first square perceived as a wall halts it at that square's
//! position. Both computation paths apply this one rule, which is what makes
//! their distributions identical in the limit.

pub mod belief;
pub mod config;
pub mod constants;
pub mod engine;
pub mod exact;
pub mod movement;
pub mod perception;
pub mod presets;
pub mod track;

pub use belief::Belief;
pub use config::{ConfigError, SimConfig};
pub use engine::run_empirical;
pub use exact::run_exact;
