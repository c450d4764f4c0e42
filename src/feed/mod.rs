//! The synthetic sales feed component
//!
//! One cohesive mutable aggregate ([`aggregate::SalesAggregate`]) is mutated
//! only by the timer tasks of [`generator::SalesFeedGenerator`]; consumers
//! read point-in-time snapshots or subscribe to a watch channel for changes.

pub mod aggregate;
pub mod catalog;
pub mod generator;
pub mod window;

pub use aggregate::SalesAggregate;
pub use generator::SalesFeedGenerator;
pub use window::SlidingWindow;
