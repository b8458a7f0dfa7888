// SPDX-License-Identifier: PMPL-1.0-or-later
//! Auditbot - accessibility audit normalization service.
//!
//! Wraps three third-party accessibility auditing engines behind one
//! tool-call protocol and reduces their structurally incompatible
//! reports into a single WCAG-mapped, severity-ranked result schema:
//!
//! - **axe** - DOM-rule engine; findings grouped into violation/pass/
//!   incomplete groups with matched nodes
//! - **lighthouse** - page-quality engine; named audits scored 0.0-1.0
//!   under named categories
//! - **wave** - remote scanning API; categorized items with codes and
//!   counts, no DOM detail
//!
//! The normalization layer ([`normalise`]) is the core: it reconciles
//! the engines' different severity vocabularies, confidence models, and
//! pass/fail/indeterminate semantics into one taxonomy. Everything
//! around it (adapters, URL resolution, the stdio tool shell) is
//! plumbing.

pub mod adapters;
pub mod config;
pub mod engines;
pub mod error;
pub mod executor;
pub mod mapping;
pub mod normalise;
pub mod report;
pub mod resolver;
pub mod selectors;
pub mod server;
pub mod tools;

pub use config::AuditConfig;
pub use error::{AuditError, Result};
pub use executor::AuditExecutor;
pub use normalise::Normaliser;
pub use report::{AuditReport, Confidence, Engine, NormalisedResult, Outcome, Severity};
