use crate::domain::entities::query::FilterValue;

/// Recovers a typed filter value from its string-only wire form.
///
/// Precedence:
/// 1. the exact literals `"true"` and `"false"` become booleans,
/// 2. a string that parses as a finite number becomes a number,
/// 3. everything else stays text.
///
/// Blank strings, `NaN` and infinities are not treated as numbers. Numbers
/// keep the original text alongside the parsed value.
pub fn coerce_value(raw: &str) -> FilterValue {
    match raw {
        "true" => return FilterValue::Boolean(true),
        "false" => return FilterValue::Boolean(false),
        _ => {}
    }

    let trimmed = raw.trim();
    if !trimmed.is_empty() {
        if let Ok(number) = trimmed.parse::<f64>() {
            if number.is_finite() {
                return FilterValue::Number {
                    value: number,
                    raw: raw.to_string(),
                };
            }
        }
    }

    FilterValue::Text(raw.to_string())
}
