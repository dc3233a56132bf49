//! API
//!
//! Functions for communicating with the DormSpace REST backend.

pub mod auth;
pub mod chores;
pub mod client;
pub mod groups;
