//! # Catalog Service Client
//!
//! Read-only HTTP client for the external product catalog API. Endpoints
//! consumed:
//!
//! - `GET {base}/products` (optionally `?limit=N`) -- JSON array of products
//! - `GET {base}/products/{id}` -- a single JSON product
//!
//! The base URL is resolved by [`crate::config::api_url`]. Responses are
//! deserialized verbatim into [`Product`]; no local normalization or caching.
//! Failures are returned as [`Error`] and handled at each call site -- the
//! views log a diagnostic and keep rendering from empty state, so a failed
//! fetch never takes the UI down.

use serde::de::DeserializeOwned;
use serde::Deserialize;
use thiserror::Error;

use crate::config;

/// Result type alias using the catalog client's [`Error`].
pub type Result<T> = std::result::Result<T, Error>;

/// Failure modes of a catalog request.
#[derive(Debug, Error)]
pub enum Error {
    /// Network failure or a response body that did not match the expected
    /// JSON shape.
    #[error("catalog request failed: {0}")]
    Transport(#[from] gloo_net::Error),

    /// The catalog answered with a non-success status (missing record, etc.).
    #[error("catalog returned status {status} for {url}")]
    Status { status: u16, url: String },
}

/// A single catalog record, as served by the API.
///
/// Unknown response fields (e.g. `rating`) are ignored on deserialize; the
/// `category` field is carried as passthrough only.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub price: f64,
    pub description: String,
    pub image: String,
    pub category: String,
}

/// The app-internal detail route for a product id.
pub fn detail_href(id: u32) -> String {
    format!("/product/{id}")
}

/// Fetch the product listing, optionally capped to `limit` records.
pub async fn list_products(limit: Option<u32>) -> Result<Vec<Product>> {
    let url = match limit {
        Some(n) => format!("{}/products?limit={n}", config::api_url()),
        None => format!("{}/products", config::api_url()),
    };
    fetch_json(&url).await
}

/// Fetch a single product.
///
/// The id is taken verbatim from the route path and spliced into the request
/// path unparsed; the catalog is the one validating it.
pub async fn get_product(id: &str) -> Result<Product> {
    let url = format!("{}/products/{id}", config::api_url());
    fetch_json(&url).await
}

async fn fetch_json<T: DeserializeOwned>(url: &str) -> Result<T> {
    let response = gloo_net::http::Request::get(url).send().await?;
    if !response.ok() {
        return Err(Error::Status {
            status: response.status(),
            url: url.to_string(),
        });
    }
    Ok(response.json::<T>().await?)
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    const PRODUCT_JSON: &str = r#"{
        "id": 1,
        "title": "Fjallraven Foldsack No. 1 Backpack",
        "price": 109.95,
        "description": "Your perfect pack for everyday use and walks in the forest.",
        "category": "men's clothing",
        "image": "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg",
        "rating": { "rate": 3.9, "count": 120 }
    }"#;

    #[test]
    fn test_product_decodes_from_catalog_shape() {
        let product: Product = serde_json::from_str(PRODUCT_JSON).unwrap();
        assert_eq!(product.id, 1);
        assert_eq!(product.title, "Fjallraven Foldsack No. 1 Backpack");
        assert!((product.price - 109.95).abs() < f64::EPSILON);
        assert_eq!(product.category, "men's clothing");
        assert_eq!(
            product.image,
            "https://fakestoreapi.com/img/81fPKd-2AYL._AC_SL1500_.jpg"
        );
    }

    #[test]
    fn test_listing_preserves_order() {
        let json = r#"[
            { "id": 3, "title": "c", "price": 3.0, "description": "", "image": "img3", "category": "x" },
            { "id": 1, "title": "a", "price": 1.0, "description": "", "image": "img1", "category": "x" },
            { "id": 2, "title": "b", "price": 2.0, "description": "", "image": "img2", "category": "x" }
        ]"#;
        let listing: Vec<Product> = serde_json::from_str(json).unwrap();
        let ids: Vec<u32> = listing.iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }

    #[test]
    fn test_malformed_payload_is_a_decode_error() {
        let result: std::result::Result<Product, _> = serde_json::from_str("{\"id\": ");
        assert!(result.is_err());
    }

    #[test]
    fn test_detail_href_format() {
        assert_eq!(detail_href(1), "/product/1");
        assert_eq!(detail_href(42), "/product/42");
    }
}
