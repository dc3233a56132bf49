//! State Management
//!
//! Global session and toast state shared via context.

pub mod global;

pub use global::{provide_global_state, GlobalState};
