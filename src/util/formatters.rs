//! Shared value formatting for the terminal and text renderers.

use unicode_width::UnicodeWidthChar;

/// Format a sea level value with fixed precision.
pub fn format_stat_value(val: f64) -> String {
    if !val.is_finite() {
        return if val.is_nan() {
            "NaN".to_string()
        } else if val.is_sign_positive() {
            "+Inf".to_string()
        } else {
            "-Inf".to_string()
        };
    }
    let abs_val = val.abs();
    if abs_val == 0.0 {
        "0".to_string()
    } else if !(1e-3..1e6).contains(&abs_val) {
        format!("{:.3e}", val)
    } else {
        format!("{:.3}", val)
    }
}

/// Format an axis label with short precision.
pub fn format_axis_label(val: f64) -> String {
    if !val.is_finite() {
        return "?".to_string();
    }
    if val.abs() >= 100.0 {
        format!("{:.0}", val)
    } else {
        format!("{:.2}", val)
    }
}

/// Cut `text` to at most `width` terminal columns, marking the cut with `…`.
pub fn truncate_to_width(text: &str, width: usize) -> String {
    let total: usize = text.chars().map(|c| c.width().unwrap_or(0)).sum();
    if total <= width {
        return text.to_string();
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for c in text.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(c);
        used += w;
    }
    out.push('…');
    out
}
