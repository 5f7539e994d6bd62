//! Display formatting shared by event, ticket, and analytics views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Uppercase the first character, leaving the rest as-is.
pub fn capitalize(raw: &str) -> String {
    let mut chars = raw.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Last eight characters of an identifier, for compact display.
pub fn short_id(id: &str) -> &str {
    let count = id.chars().count();
    if count <= 8 {
        return id;
    }
    let start = id.char_indices().nth(count - 8).map_or(0, |(i, _)| i);
    &id[start..]
}

/// Group the integer part with commas and keep up to two decimals.
pub fn format_thousands(value: f64) -> String {
    let negative = value < 0.0;
    let rounded = format!("{:.2}", value.abs());
    let (int_part, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, ch) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    let frac = frac_part.trim_end_matches('0');
    let sign = if negative { "-" } else { "" };
    if frac.is_empty() {
        format!("{sign}{grouped}")
    } else {
        format!("{sign}{grouped}.{frac}")
    }
}

/// Price label without currency; unparsable prices show as `N/A`.
pub fn format_price(price: Option<f64>) -> String {
    price.map_or_else(|| "N/A".to_owned(), format_thousands)
}

/// `YYYY-MM-DD` prefix of a date or ISO-8601 timestamp.
pub fn iso_date(raw: &str) -> Option<&str> {
    let date = raw.trim().get(..10)?;
    let bytes = date.as_bytes();
    let shape_ok = bytes.iter().enumerate().all(|(i, b)| match i {
        4 | 7 => *b == b'-',
        _ => b.is_ascii_digit(),
    });
    shape_ok.then_some(date)
}
