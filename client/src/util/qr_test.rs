use super::*;

#[test]
fn qr_svg_renders_svg_markup() {
    let svg = qr_svg("65f1c0a2b3d4e5f6a7b8c9d0").unwrap();
    assert!(svg.contains("<svg"));
}

#[test]
fn qr_svg_rejects_oversized_payload() {
    let payload = "x".repeat(8000);
    assert!(qr_svg(&payload).is_none());
}
