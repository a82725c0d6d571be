//! The calendrical collaborator of the `bazi` workspace.
//!
//! The public seam is deliberately narrow, two operations: build a validated
//! [`SolarTime`](bazi_common::SolarTime) (in `bazi-common`) and derive its
//! [`EightChar`] here. Everything else — time scales, the position of the
//! Sun, the sexagenary cycle — is plumbing behind that seam, so the whole
//! computation could be swapped for another calendrical library without
//! touching the input or printing layers.

pub mod chart;
pub mod ganzhi;
pub mod sun;
pub mod time_scales;

pub use chart::EightChar;
pub use ganzhi::{Branch, Pillar, Stem};
