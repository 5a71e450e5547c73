//! Static page sections, rendered once from the embedded content.

mod contact;
mod header;
mod hero;
mod projects;

pub use contact::contact;
pub use header::header;
pub use hero::hero;
pub use projects::projects;

use shared::Section;
use zoon::*;

/// Give a section its in-page anchor id, if it has one.
fn anchored<R: RawEl>(raw_el: R, section: Section) -> R {
    match section.anchor() {
        Some(id) => raw_el.attr("id", id),
        None => raw_el,
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use shared::PortfolioContent;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    /// Attach `element` to a fresh container in `<body>`.
    pub(crate) fn mount(element: impl Element) -> (web_sys::Element, zoon::dominator::DomHandle) {
        let document = web_sys::window().unwrap().document().unwrap();
        let container = document.create_element("div").unwrap();
        document.body().unwrap().append_child(&container).unwrap();
        let handle = zoon::dominator::append_dom(&container, element.into_raw().into_dom());
        (container, handle)
    }

    /// Non-blank text nodes below `node`, in document order.
    pub(crate) fn rendered_texts(node: &web_sys::Node) -> Vec<String> {
        let mut texts = Vec::new();
        collect_texts(node, &mut texts);
        texts
    }

    fn collect_texts(node: &web_sys::Node, texts: &mut Vec<String>) {
        if node.node_type() == web_sys::Node::TEXT_NODE {
            let text = node.text_content().unwrap_or_default();
            if !text.trim().is_empty() {
                texts.push(text.trim().to_string());
            }
            return;
        }
        let children = node.child_nodes();
        for index in 0..children.length() {
            if let Some(child) = children.item(index) {
                collect_texts(&child, texts);
            }
        }
    }

    fn assert_renders_texts_once(element: impl Element, content: &PortfolioContent, section: Section) {
        let (container, handle) = mount(element);
        let rendered = rendered_texts(&container);
        let expected = content.texts(section);

        assert_eq!(rendered.len(), expected.len(), "{section:?} rendered {rendered:?}");
        for text in &expected {
            let in_dom = rendered.iter().filter(|rendered| rendered.as_str() == *text).count();
            let in_content = expected.iter().filter(|expected| *expected == text).count();
            assert_eq!(in_dom, in_content, "{section:?}: `{text}`");
        }

        handle.discard();
        container.remove();
    }

    #[wasm_bindgen_test]
    fn header_renders_brand_and_nav_once() {
        let content = PortfolioContent::embedded().unwrap();
        assert_renders_texts_once(header(&content.header), &content, Section::Header);
    }

    #[wasm_bindgen_test]
    fn hero_renders_each_text_once() {
        let content = PortfolioContent::embedded().unwrap();
        assert_renders_texts_once(hero(&content.hero), &content, Section::Hero);
    }

    #[wasm_bindgen_test]
    fn projects_render_every_card_once() {
        let content = PortfolioContent::embedded().unwrap();
        assert_renders_texts_once(projects(&content.projects), &content, Section::Projects);
    }

    #[wasm_bindgen_test]
    fn contact_renders_each_text_once() {
        let content = PortfolioContent::embedded().unwrap();
        assert_renders_texts_once(contact(&content.contact), &content, Section::Contact);
    }

    #[wasm_bindgen_test]
    fn nav_targets_exist_for_anchored_sections() {
        let content = PortfolioContent::embedded().unwrap();
        let (container, handle) = mount(
            Column::new()
                .item(projects(&content.projects))
                .item(contact(&content.contact)),
        );

        assert!(container.query_selector("#projects").unwrap().is_some());
        assert!(container.query_selector("#contact").unwrap().is_some());
        let mailto = container.query_selector("a[href^='mailto:']").unwrap().unwrap();
        assert_eq!(mailto.get_attribute("href").unwrap(), "mailto:ujviboti@gmail.com");

        handle.discard();
        container.remove();
    }
}
