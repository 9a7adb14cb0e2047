//! Validation errors for profile data.

/// A birth profile or personality value failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProfileError {
    /// A scalar that must lie in `[0, 1]` was outside that range (or NaN).
    #[error("{field} must be within [0, 1], got {value}")]
    OutOfRange {
        /// Name of the offending field.
        field: &'static str,
        /// The rejected value.
        value: f64,
    },
}

/// Check that `value` lies in the closed unit interval.
pub(crate) fn check_unit(field: &'static str, value: f64) -> Result<(), ProfileError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ProfileError::OutOfRange { field, value })
    }
}
