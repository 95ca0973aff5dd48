//! Product detail view.
//!
//! Fetches the product named by the route's `:id` parameter on mount and on
//! every id change. Responses are committed through a monotonic
//! [`RequestGeneration`] counter, so a slow response for a previous id can
//! never overwrite the product currently being viewed.

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::api::{self, Product};

/// Monotonic token dispenser for in-flight fetches. Each new fetch takes a
/// fresh token; only the holder of the newest token may commit its result.
#[derive(Debug, Default)]
struct RequestGeneration(u64);

impl RequestGeneration {
    fn begin(&mut self) -> u64 {
        self.0 += 1;
        self.0
    }

    fn is_current(&self, token: u64) -> bool {
        self.0 == token
    }
}

#[component]
pub fn ProductDetail() -> impl IntoView {
    let params = use_params_map();
    let (product, set_product) = signal(None::<Product>);
    let generation = StoredValue::new(RequestGeneration::default());

    Effect::new(move || {
        let Some(id) = params.with(|p| p.get("id")) else {
            return;
        };
        let Some(token) = generation.try_update_value(|g| g.begin()) else {
            return;
        };
        set_product.set(None);
        leptos::task::spawn_local(async move {
            match api::get_product(&id).await {
                Ok(fetched) => {
                    if generation.with_value(|g| g.is_current(token)) {
                        set_product.set(Some(fetched));
                    }
                }
                Err(err) => log::error!("failed to fetch product {id}: {err}"),
            }
        });
    });

    view! {
        <div class="pt-24 px-6 pb-16 max-w-3xl mx-auto">
            <h2 class="text-2xl font-bold text-gray-900 mb-8">"Product Details"</h2>
            {move || match product.get() {
                Some(p) => {
                    view! {
                        <div class="bg-white border border-gray-200 rounded-2xl p-8 flex flex-col items-center text-center">
                            <img src=p.image alt=p.title.clone() class="h-64 object-contain mb-6" />
                            <h3 class="text-xl font-bold text-gray-900 mb-4">{p.title}</h3>
                            <p class="text-gray-600 leading-relaxed mb-6">{p.description}</p>
                            <p class="text-lg font-bold text-gray-900">
                                {format!("Price: ${}", p.price)}
                            </p>
                        </div>
                    }
                        .into_any()
                }
                None => view! { <p class="text-gray-500">"Loading product details..."</p> }.into_any(),
            }}
        </div>
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_newest_generation_commits() {
        let mut generation = RequestGeneration::default();

        // Fetch for id=1 starts, then the user navigates to id=2 before it
        // resolves.
        let for_first_id = generation.begin();
        let for_second_id = generation.begin();

        // The late id=1 response must be dropped; the id=2 response lands.
        assert!(!generation.is_current(for_first_id));
        assert!(generation.is_current(for_second_id));
    }

    #[test]
    fn test_tokens_are_strictly_increasing() {
        let mut generation = RequestGeneration::default();
        let a = generation.begin();
        let b = generation.begin();
        let c = generation.begin();
        assert!(a < b && b < c);
        assert!(generation.is_current(c));
    }
}
