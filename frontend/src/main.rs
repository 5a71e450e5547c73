//! Funky Dev portfolio - browser entry point

use zoon::*;

use shared::PortfolioContent;

mod app;
mod error_ui;
mod glow_layer;
mod logging;
mod motion;
mod pointer;
mod sections;

pub fn main() {
    match PortfolioContent::embedded() {
        Ok(content) => {
            app::apply_document_language(&content.meta);
            let root_element = app::PortfolioApp::new(content).root();
            start_app("app", move || root_element);
        }
        Err(error) => {
            logging::log_critical(&format!("Failed to load page content: {error}"));
            start_app("app", move || error_ui::content_error_panel(&error));
        }
    }
}
