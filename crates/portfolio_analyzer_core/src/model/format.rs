//! Human-readable number rendering for reports
//!
//! Amounts are printed with the shortest digit string that round-trips to the
//! same `f32`, always carrying at least one fractional digit. Magnitudes
//! outside `[1e-3, 1e7)` switch to scientific notation with an upper-case
//! exponent marker (`1.0E7`, `2.5E-4`).

/// Render an amount or rate for display.
#[must_use]
pub fn render_amount(value: f32) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value == f32::INFINITY {
        return "Infinity".to_string();
    }
    if value == f32::NEG_INFINITY {
        return "-Infinity".to_string();
    }

    let magnitude = value.abs();
    if magnitude == 0.0 || (1e-3..1e7).contains(&magnitude) {
        // Debug keeps the trailing ".0" on integral values
        return format!("{value:?}");
    }

    let sci = format!("{value:e}");
    match sci.split_once('e') {
        Some((mantissa, exponent)) if mantissa.contains('.') => format!("{mantissa}E{exponent}"),
        Some((mantissa, exponent)) => format!("{mantissa}.0E{exponent}"),
        None => sci,
    }
}
