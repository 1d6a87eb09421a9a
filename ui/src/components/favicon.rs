use std::cell::Cell;
use std::rc::Rc;

use dioxus::prelude::*;
use dioxus_logger::tracing::info;
use serde_json::Value;

/// The tab icon. `document::Link` only inserts the element on first render,
/// so later changes rewrite the existing element's `href` in place.
#[component]
pub fn Favicon(href: &'static str) -> Element {
    let initial = use_hook(|| href);
    let applied = use_hook(|| Rc::new(Cell::new(href)));

    if applied.get() != href {
        applied.set(href);
        info!("favicon switched to {href}");
        let _ = document::eval(&rewrite_script(href));
    }

    rsx! {
        document::Link {
            rel: "icon",
            href: "{initial}",
        }
    }
}

fn rewrite_script(href: &str) -> String {
    let href = Value::from(href);
    format!(
        r#"
        let link = document.querySelector('link[rel="icon"]');
        if (!link) {{
            link = document.createElement("link");
            link.rel = "icon";
            document.head.appendChild(link);
        }}
        link.href = {href};
        "#
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rewrite_script_quotes_the_href() {
        let script = rewrite_script("/icon.png");
        assert!(script.contains(r#"link.href = "/icon.png";"#));
        assert!(script.contains(r#"link[rel="icon"]"#));
    }
}
