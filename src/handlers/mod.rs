//! HTTP handlers for the publications resource.

pub mod publications;
pub use publications::*;
