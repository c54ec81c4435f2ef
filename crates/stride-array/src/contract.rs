//! Contract enforcement for the panicking method forms.

use stride_core::ArrayError;

/// Unwrap a checked result, panicking at the caller's location with the
/// error's message.
#[track_caller]
pub(crate) fn expect_ok<T>(result: Result<T, ArrayError>) -> T {
    match result {
        Ok(value) => value,
        Err(e) => panic!("{e}"),
    }
}
