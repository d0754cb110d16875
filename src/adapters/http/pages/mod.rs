//! Static pages: the checkout page and the redirect landing pages.

mod handlers;
mod routes;

pub use routes::page_routes;

const INDEX_TEMPLATE: &str = include_str!("index.html");
const KEY_PLACEHOLDER: &str = "{{PUBLISHABLE_KEY}}";

/// Renders the checkout page with `publishable_key` embedded as a JS string literal.
pub fn render_index(publishable_key: &str) -> String {
    let literal = serde_json::Value::String(publishable_key.to_string())
        .to_string()
        .replace('<', "\\u003c");
    INDEX_TEMPLATE.replace(KEY_PLACEHOLDER, &literal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn render_embeds_key_as_string_literal() {
        let html = render_index("pk_test_123");

        assert!(html.contains(r#"Stripe("pk_test_123")"#));
        assert!(!html.contains(KEY_PLACEHOLDER));
    }

    #[test]
    fn render_escapes_script_breakout() {
        let html = render_index("pk_</script><script>alert(1)");

        assert!(!html.contains("</script><script>alert(1)"));
        assert!(html.contains("\\u003c/script>"));
    }

    #[test]
    fn page_posts_to_checkout() {
        let html = render_index("pk_test_123");

        assert!(html.contains("fetch('/checkout'"));
        assert!(html.contains("redirectToCheckout"));
    }
}
