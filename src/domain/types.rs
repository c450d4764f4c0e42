//! Type definitions for the sales feed domain

use chrono::{DateTime, Local};
use nutype::nutype;
use uuid::Uuid;

/// Lowest synthetic sale amount in dollars (inclusive)
pub const MIN_SALE_AMOUNT: f64 = 10.0;

/// Highest synthetic sale amount in dollars (exclusive)
pub const MAX_SALE_AMOUNT: f64 = 510.0;

/// A single sale amount in dollars, within the synthetic range
#[nutype(
    derive(
        Clone, Copy, Debug, Display, PartialEq, PartialOrd, Serialize, Deserialize, TryFrom,
        AsRef, Into
    ),
    validate(finite, greater_or_equal = 10.0, less = 510.0)
)]
pub struct SaleAmount(f64);

/// Unique identifier for a synthetic payment
///
/// UUIDv7 keeps the timestamp-plus-random-suffix shape the payment feed
/// relies on for uniqueness.
#[nutype(derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize))]
pub struct PaymentId(Uuid);

impl PaymentId {
    pub fn generate() -> Self {
        // Uuid::now_v7() always generates a valid UUID
        Self::new(Uuid::now_v7())
    }
}

impl Default for PaymentId {
    fn default() -> Self {
        Self::generate()
    }
}

/// Name of a catalog product attached to a sale
#[nutype(derive(Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize, From, AsRef))]
pub struct ProductName(String);

/// Full customer name attached to a sale
#[nutype(derive(Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize, From, AsRef))]
pub struct CustomerName(String);

/// Local wall-clock timestamp of an event, formatted HH:MM:SS
#[nutype(derive(Clone, Debug, Display, PartialEq, Eq, Serialize, Deserialize, From, AsRef))]
pub struct EventTime(String);

impl EventTime {
    pub fn from_datetime(at: DateTime<Local>) -> Self {
        Self::new(at.format("%H:%M:%S").to_string())
    }

    pub fn now() -> Self {
        Self::from_datetime(Local::now())
    }
}
