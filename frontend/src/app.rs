//! PortfolioApp - root of the page
//!
//! Owns the page content and the pointer tracker. The tracker is bound to the
//! browser window for as long as the root element is mounted.

use zoon::*;

use portfolio_ui::{CONTAINER_MAX_WIDTH, FONT_FAMILY_SANS, SPACING_16, page_background};
use shared::{PageMeta, PortfolioContent, PointerTracker};

use crate::glow_layer::glow_layer;
use crate::logging::log_critical;
use crate::pointer::WindowPointerSource;
use crate::sections::{contact, header, hero, projects};

/// Mirror the content language onto `<html lang>`.
pub fn apply_document_language(meta: &PageMeta) {
    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        log_critical("Document is not available, page language not set");
        return;
    };
    if let Err(error) = root.set_attribute("lang", &meta.language) {
        log_critical(&format!("Failed to set page language: {error:?}"));
    }
}

pub struct PortfolioApp {
    pub content: PortfolioContent,

    /// Single writer of the pointer position; the glow layer only reads it
    pub pointer_tracker: PointerTracker,
}

impl PortfolioApp {
    pub fn new(content: PortfolioContent) -> Self {
        Self {
            content,
            pointer_tracker: PointerTracker::new(),
        }
    }

    /// Root UI element
    pub fn root(&self) -> impl Element + use<> {
        let pointer_subscription = self.pointer_tracker.activate(&WindowPointerSource);
        if let Some(reason) = pointer_subscription.unavailable_reason() {
            log_critical(&format!("Pointer tracking unavailable, glow stays at the origin: {reason}"));
        }

        Stack::new()
            .s(Width::fill())
            .s(Font::new().family([
                FontFamily::new(FONT_FAMILY_SANS),
                FontFamily::new("system-ui"),
                FontFamily::new("Segoe UI"),
                FontFamily::new("Arial"),
                FontFamily::SansSerif,
            ]))
            .update_raw_el(|raw_el| {
                raw_el
                    .style("min-height", "100vh")
                    .style("overflow", "hidden")
                    .style("background-image", &page_background())
            })
            .layer(self.page())
            .layer(glow_layer(self.pointer_tracker.reader()))
            .after_remove(move |_| drop(pointer_subscription))
    }

    fn page(&self) -> impl Element + use<> {
        Column::new()
            .s(Width::fill().max(CONTAINER_MAX_WIDTH))
            .s(Align::new().center_x())
            .s(Padding::new().x(SPACING_16))
            .item(header(&self.content.header))
            .item(
                Column::with_tag(Tag::Main)
                    .s(Width::fill())
                    .item(hero(&self.content.hero))
                    .item(projects(&self.content.projects))
                    .item(contact(&self.content.contact)),
            )
    }
}
