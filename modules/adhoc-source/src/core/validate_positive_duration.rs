use core::time::Duration;

use super::adhoc_source_error::AdhocSourceError;

/// Validates that the provided duration is greater than zero.
///
/// # Errors
///
/// Returns [`AdhocSourceError::InvalidArgument`] when `value` is zero.
pub const fn validate_positive_duration(name: &'static str, value: Duration) -> Result<Duration, AdhocSourceError> {
  if value.is_zero() {
    return Err(AdhocSourceError::InvalidArgument { name, reason: "must be greater than zero" });
  }
  Ok(value)
}
