//! QR code rendering for ticket identifiers.

#[cfg(test)]
#[path = "qr_test.rs"]
mod qr_test;

use qrcode::QrCode;
use qrcode::render::svg;

/// Render `payload` as an SVG document, or `None` when it cannot be encoded.
pub fn qr_svg(payload: &str) -> Option<String> {
    let code = QrCode::new(payload.as_bytes()).ok()?;
    Some(
        code.render::<svg::Color>()
            .min_dimensions(240, 240)
            .dark_color(svg::Color("#000000"))
            .light_color(svg::Color("#ffffff"))
            .build(),
    )
}
