/*!
 * Core Module
 * Shared types, limits and errors
 */

pub mod errors;
pub mod limits;
pub mod types;

pub use errors::{SchedError, SchedResult};
pub use types::{Priority, ProcessId, Ticks};
