//! Span helpers for the dialog's tracing output.

use std::fmt::Debug;
use tracing::{field, warn, Span};

/// Fill in `field_name` on the current span once its value is known.
///
/// Transitions declare their late fields as `field::Empty` in `#[instrument]`
/// and call this when the value becomes available, so later events in the
/// transition carry it:
/// ```text
///   INFO confirm{client_id=my-client format=PKCS12}: Key store configuration confirmed.
/// ```
///
/// Recording an undeclared field is a silent no-op in tracing, so debug builds
/// log a warning instead.
pub fn record_field(field_name: &str, field_value: &dyn Debug) {
    let span = Span::current();
    if cfg!(debug_assertions) && !span.has_field(field_name) {
        warn!("Span has no field named {field_name}, value dropped");
    }
    span.record(field_name, field::debug(field_value));
}

#[cfg(test)]
mod tests {
    use super::*;
    use tracing::info_span;

    #[test]
    fn recording_never_panics() {
        record_field("format", &"JKS");

        let span = info_span!("transition", format = field::Empty);
        let _entered = span.enter();
        record_field("format", &"JKS");
        record_field("undeclared", &1);
    }
}
