//! Handling of secrets entered into the form.

use serde::{Deserialize, Serialize};
use std::fmt::{self, Debug, Display, Formatter};
use zeroize::ZeroizeOnDrop;

/// Label printed in place of sensitive information.
pub const REDACTED_INFO_LABEL: &str = "***REDACTED***";

/// A password or other secret typed by the user.
///
/// The value is wiped from memory on drop and never shows up in `Debug` or
/// `Display` output, so it is safe to log structures that contain it. It is
/// serialized in the clear since the server needs the value.
#[derive(Clone, Default, PartialEq, Eq, ZeroizeOnDrop, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SensitiveString(String);

impl SensitiveString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Access the secret. Callers must not log the result.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl From<&str> for SensitiveString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for SensitiveString {
    fn from(value: String) -> Self {
        Self(value)
    }
}

impl Debug for SensitiveString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_tuple("SensitiveString")
            .field(&REDACTED_INFO_LABEL)
            .finish()
    }
}

impl Display for SensitiveString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED_INFO_LABEL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn secrets_are_redacted_in_output() {
        let secret = SensitiveString::new("hunter2");

        let debug = format!("{secret:?}");
        let display = format!("{secret}");
        assert!(!debug.contains("hunter2"));
        assert!(!display.contains("hunter2"));
        assert!(debug.contains(REDACTED_INFO_LABEL));
        assert_eq!(display, REDACTED_INFO_LABEL);
    }

    #[test]
    fn secrets_serialize_in_the_clear() {
        let secret = SensitiveString::new("hunter2");
        assert_eq!(serde_json::to_string(&secret).unwrap(), "\"hunter2\"");
        assert_eq!(secret.expose(), "hunter2");
    }
}
