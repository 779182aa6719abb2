//! The booking-admission decision.
//!
//! Admission is a single-shot decision per submission: no retries, no queueing.
//! Callers must hold the per-slot serialization (see the db crate's lock map)
//! across the availability read and the subsequent write.

use crate::errors::{BookingError, BookingResult};

/// Outcome of comparing a requested quantity against remaining capacity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// Enough capacity remains; the booking may be persisted.
    Granted,
    /// Some capacity remains, but less than requested.
    PartiallyUnavailable,
    /// No capacity remains at all.
    FullyBooked,
}

/// Decides admission for `quantity` against `free` remaining slots.
///
/// The rejection tier depends only on whether any capacity remains:
/// `free > 0` is a partial shortfall, `free == 0` is booked out.
pub fn admit(free: i64, quantity: i32) -> Admission {
    if i64::from(quantity) <= free {
        Admission::Granted
    } else if free > 0 {
        Admission::PartiallyUnavailable
    } else {
        Admission::FullyBooked
    }
}

/// The unit price charged at booking time: the slot's override price when set
/// and nonzero, otherwise the event's base price.
pub fn effective_unit_price(override_price: Option<f64>, base_price: f64) -> f64 {
    match override_price {
        Some(price) if price > 0.0 => price,
        _ => base_price,
    }
}

/// Rejects non-positive quantities before any storage access.
pub fn validate_quantity(quantity: i32) -> BookingResult<()> {
    if quantity <= 0 {
        return Err(BookingError::InvalidQuantity(quantity));
    }
    Ok(())
}
