use std::sync::LazyLock;

use regex::Regex;

static NON_NUMERIC: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"[^0-9.,]").expect("static pattern")
});

/// Parse a locale-ambiguous amount such as `"€1.234,56"` or `"1234.56"`.
///
/// Everything but digits, `.` and `,` is dropped (signs included). With both
/// separators present `.` groups thousands and `,` is the decimal point; a lone
/// `,` is the decimal point; a lone `.` is kept as is. Anything unparseable is
/// `0.0`.
pub fn normalize(raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    let cleaned = NON_NUMERIC.replace_all(raw, "");
    let has_dot = cleaned.contains('.');
    let has_comma = cleaned.contains(',');

    let canonical = if has_dot && has_comma {
        cleaned.replace('.', "").replace(',', ".")
    } else if has_comma {
        cleaned.replace(',', ".")
    } else {
        cleaned.into_owned()
    };

    canonical.parse().unwrap_or(0.0)
}
