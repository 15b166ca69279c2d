//! Path verification: pure predicates plus the named-check runner

mod checks;
mod runner;

pub use checks::Verifier;
pub use runner::{CheckKind, CheckResult, Report, Runner, ALL_CHECKS};
