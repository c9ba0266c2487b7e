//! # Prompt Templates
//!
//! The behavioral policy injected ahead of every question lives here as
//! versioned data, separate from the assembly logic, so it can be reviewed
//! and updated independently.

pub mod core;
