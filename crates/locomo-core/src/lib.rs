//! locomo-core
//!
//! Pure domain types for the locomotive-syndrome self check: the user
//! profile, the three test results, the assessment session and the wizard
//! that fills it. No I/O; this is the shared vocabulary of the system.

pub mod calc;
pub mod error;
pub mod models;
pub mod wizard;
