use crate::error::{HttpSigError, HttpSigResult};

/// Explicit encode step for text entering a signing primitive. The signing
/// string ends up embedded in header values, so it must be 7-bit clean.
pub(crate) fn ascii_bytes(data: &str) -> HttpSigResult<&[u8]> {
  if data.is_ascii() {
    Ok(data.as_bytes())
  } else {
    Err(HttpSigError::NonAsciiInput)
  }
}
