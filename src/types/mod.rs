//! All data types for the transit-reach library.

pub mod error;

pub use error::{TransitError, TransitResult};

/// Dense internal identifier assigned to each station as it is first seen.
///
/// Station identity is the name string; IDs are an interning detail and never
/// appear on the public surface.
pub type StationId = u32;

/// Validate an edge weight: finite and non-negative.
pub fn validate_weight(weight: f64) -> TransitResult<()> {
    if !weight.is_finite() || weight < 0.0 {
        return Err(TransitError::InvalidWeight(weight));
    }
    Ok(())
}
