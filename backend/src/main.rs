use moon::*;
use shared::{PageMeta, PortfolioContent};

// ===== CENTRALIZED DEBUG FLAGS =====
const DEBUG_BACKEND: bool = false; // Frontend/page requests

// Debug macro for easy toggling
macro_rules! debug_log {
    ($flag:expr, $($arg:tt)*) => {
        if $flag {
            println!($($arg)*);
        }
    };
}

const FALLBACK_TITLE: &str = "Funky Dev Portfolio";

async fn frontend() -> Frontend {
    let meta = page_meta();
    debug_log!(DEBUG_BACKEND, "🔍 BACKEND: Serving page '{}'", meta.title);
    let head = head_html(&meta);
    Frontend::new()
        .title(meta.title)
        .append_to_head(&head)
        .index_by_robots(true)
}

/// Document metadata from the embedded content, or a bare title when the content is broken.
fn page_meta() -> PageMeta {
    match PortfolioContent::embedded() {
        Ok(content) => content.meta,
        Err(error) => {
            eprintln!("🚨 BACKEND: Page content unavailable, serving fallback title: {error}");
            PageMeta {
                title: FALLBACK_TITLE.to_string(),
                description: String::new(),
                language: "en".to_string(),
            }
        }
    }
}

fn head_html(meta: &PageMeta) -> String {
    let mut head = String::from(r#"<meta name="viewport" content="width=device-width, initial-scale=1">"#);
    if !meta.description.is_empty() {
        head.push_str(&format!(
            r#"<meta name="description" content="{}">"#,
            escape_attribute(&meta.description)
        ));
    }
    head
}

fn escape_attribute(value: &str) -> String {
    value
        .replace('&', "&amp;")
        .replace('"', "&quot;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

// The page is static; nothing is sent up from the browser.
async fn up_msg_handler(_req: UpMsgRequest<()>) {
    debug_log!(DEBUG_BACKEND, "🔍 BACKEND: Ignoring UpMsg");
}

#[moon::main]
async fn main() -> std::io::Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        println!("BACKEND PANIC: {:?}", panic_info);
    }));

    start(frontend, up_msg_handler, |_error| {}).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_carries_description() {
        let meta = page_meta();
        assert_eq!(meta.title, "Funky Dev Portfolio");
        let head = head_html(&meta);
        assert!(head.contains(
            r#"<meta name="description" content="A unique, animated, and funky portfolio showcasing web development skills">"#
        ));
    }

    #[test]
    fn test_description_is_escaped() {
        let meta = PageMeta {
            title: "t".to_string(),
            description: r#"Fish & "chips" <b>"#.to_string(),
            language: "en".to_string(),
        };
        assert!(head_html(&meta).contains("Fish &amp; &quot;chips&quot; &lt;b&gt;"));
    }

    #[test]
    fn test_empty_description_omitted() {
        let meta = PageMeta {
            title: FALLBACK_TITLE.to_string(),
            description: String::new(),
            language: "en".to_string(),
        };
        assert!(!head_html(&meta).contains("description"));
    }
}
