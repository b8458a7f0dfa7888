// SPDX-License-Identifier: PMPL-1.0-or-later
//! Native report shapes, one module per engine.
//!
//! These mirror what each engine actually emits. Every optional field
//! carries a serde default so a sparse or partially malformed report
//! deserializes into a usable value instead of failing; only input that
//! is not an object at all is rejected, by serde itself.

pub mod axe;
pub mod lighthouse;
pub mod wave;

pub use axe::AxeReport;
pub use lighthouse::LighthouseReport;
pub use wave::WaveReport;
