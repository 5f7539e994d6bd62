use super::*;

#[test]
fn capitalize_first_letter() {
    assert_eq!(capitalize("upcoming"), "Upcoming");
    assert_eq!(capitalize(""), "");
    assert_eq!(capitalize("Closed"), "Closed");
}

#[test]
fn short_id_keeps_last_eight() {
    assert_eq!(short_id("65f1c0a2b3d4e5f6a7b8c9d0"), "a7b8c9d0");
    assert_eq!(short_id("abc"), "abc");
    assert_eq!(short_id("12345678"), "12345678");
}

#[test]
fn format_thousands_groups_integers() {
    assert_eq!(format_thousands(0.0), "0");
    assert_eq!(format_thousands(999.0), "999");
    assert_eq!(format_thousands(1000.0), "1,000");
    assert_eq!(format_thousands(1_234_567.0), "1,234,567");
}

#[test]
fn format_thousands_keeps_significant_decimals() {
    assert_eq!(format_thousands(1234.5), "1,234.5");
    assert_eq!(format_thousands(12.25), "12.25");
    assert_eq!(format_thousands(-1500.0), "-1,500");
}

#[test]
fn format_price_handles_missing() {
    assert_eq!(format_price(Some(150.0)), "150");
    assert_eq!(format_price(None), "N/A");
}

#[test]
fn iso_date_accepts_date_and_timestamp() {
    assert_eq!(iso_date("2025-06-01"), Some("2025-06-01"));
    assert_eq!(iso_date("2025-06-01T18:00:00.000Z"), Some("2025-06-01"));
}

#[test]
fn iso_date_rejects_other_shapes() {
    assert_eq!(iso_date("June 1, 2025"), None);
    assert_eq!(iso_date("2025/06/01"), None);
    assert_eq!(iso_date(""), None);
}
