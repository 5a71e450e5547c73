use zoon::*;

use portfolio_ui::*;
use shared::ContentError;

/// Shown instead of the page when the embedded content can't be loaded.
pub fn content_error_panel(error: &ContentError) -> impl Element + use<> {
    Column::new()
        .s(Align::center())
        .s(Padding::all(SPACING_24))
        .s(Gap::new().y(SPACING_8))
        .s(RoundedCorners::all(CORNER_RADIUS_8))
        .update_raw_el(|raw_el| raw_el.style("background-color", GLASS_SURFACE))
        .item(heading(Tag::H1, "Page content unavailable", FONT_SIZE_24))
        .item(paragraph(error.to_string(), FONT_SIZE_16))
}
