//! Runtime configuration resolved from the host page.
//!
//! The catalog base URL defaults to the public Fake Store API and can be
//! overridden without rebuilding by injecting a meta tag into `index.html`:
//!
//! ```html
//! <meta name="storefront:api-url" content="https://catalog.example.com">
//! ```

/// Catalog base URL used when the host page provides no override.
pub const DEFAULT_API_URL: &str = "https://fakestoreapi.com";

/// Meta tag consulted for a base URL override.
const API_URL_META: &str = "storefront:api-url";

/// The catalog base URL for this page load.
pub fn api_url() -> String {
    resolve(meta_content(API_URL_META))
}

fn resolve(meta: Option<String>) -> String {
    meta.filter(|url| !url.is_empty())
        .unwrap_or_else(|| DEFAULT_API_URL.to_string())
}

fn meta_content(name: &str) -> Option<String> {
    let document = web_sys::window()?.document()?;
    let tag = document
        .query_selector(&format!("meta[name='{name}']"))
        .ok()
        .flatten()?;
    tag.get_attribute("content")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_falls_back_to_default() {
        assert_eq!(resolve(None), DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_ignores_empty_override() {
        assert_eq!(resolve(Some(String::new())), DEFAULT_API_URL);
    }

    #[test]
    fn test_resolve_prefers_override() {
        assert_eq!(
            resolve(Some("http://localhost:8080".to_string())),
            "http://localhost:8080"
        );
    }
}
