//! Domain types for the synthetic sales feed
//!
//! This module contains the core types that represent a fabricated sale and
//! the aggregate snapshot exposed to dashboards, following type-driven
//! development principles.

pub mod sale;
pub mod types;

pub use sale::*;
pub use types::*;
