//! The three independent signal pillar scorers.
//!
//! Each scorer converts one upstream bundle into a 0-100 score plus a
//! structured detail record. Scores are clamped by construction: every
//! branch produces values inside [0, 100] before fusion sees them.

pub mod institutional;
pub mod narrative;
pub mod setup;

pub use institutional::score_institutional;
pub use narrative::score_narrative;
pub use setup::score_setup;
