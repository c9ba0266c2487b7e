//! # API Route Handlers
//!
//! This module organizes the Axum route handlers for the `prism-server`,
//! split by functionality: the conversational endpoint, the sample-image
//! endpoints, and the general root/health routes.

pub mod chat;
pub mod general;
pub mod image;

// Re-export all handlers from the sub-modules to make them easily
// accessible to the router under a single `handlers::` path.
pub use chat::*;
pub use general::*;
pub use image::*;
