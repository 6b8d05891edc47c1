//! Use cases
//!
//! Application-level operations that orchestrate domain logic.

pub mod present_results;
pub mod run_assessment;
pub mod submit_assessment;
