//! Threat Index Module
//!
//! Turns the fused verdict into the display-facing threat index: one 0-100
//! score, a discrete risk band, and a fixed-weight component breakdown.
//!
//! ## Structure
//! - `types`: ThreatIndex, RiskBand, Component
//! - `rules`: weight table and the two band-threshold variants
//! - `compose`: the composition itself

pub mod compose;
pub mod rules;
pub mod types;

pub use compose::compose;
pub use rules::{BandThresholds, COMPONENT_WEIGHTS};
pub use types::{Component, RiskBand, ThreatIndex};
