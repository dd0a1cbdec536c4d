/*!
 * Process Module
 * Process records, per-process outcomes and input validation
 */

pub mod types;
pub mod validation;

pub use types::{Process, ProcessOutcome, TimeSlice};
pub use validation::{validate_arrival_order, validate_process, validate_processes};
