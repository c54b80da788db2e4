//! Decision Logic
//!
//! The analysis pipeline and everything it is made of. Stages in order:
//!
//! 1. `lexical` - structural URL checks, local risk score
//! 2. `domain_intel` - hostname reputation, model verdict resolution
//! 3. `fusion` - local evidence vs model verdict
//! 4. `threat_index` - display score, band, component breakdown
//!
//! Plus the `model` boundary client, the `attack`/`summary` report
//! enrichment, request `validate`, and the `pipeline` orchestration.

pub mod attack;
pub mod domain_intel;
pub mod fusion;
pub mod lexical;
pub mod model;
pub mod pipeline;
pub mod summary;
pub mod threat_index;
pub mod validate;
