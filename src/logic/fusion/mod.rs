//! Confidence Fusion Module
//!
//! Second pipeline stage: local lexical evidence meets the model verdict.
//! This is where a verdict can be nudged or flipped - nowhere else.

pub mod policy;
pub mod types;

pub use policy::{fuse, fuse_with_policy, FusionPolicy, ADVISORY_SCORE};
pub use types::{FusedVerdict, ModelVerdict, VerdictLabel};
