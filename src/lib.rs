pub mod api;
pub mod components;
pub mod config;
pub mod pages;

use components::navbar::Navbar;
use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Title};
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;
use pages::home::Home;
use pages::product_detail::ProductDetail;
use pages::products::Products;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    // The shell owns the one full product listing; the grid route renders
    // from it without fetching on its own.
    let (products, set_products) = signal(Vec::<api::Product>::new());
    leptos::task::spawn_local(async move {
        match api::list_products(None).await {
            Ok(listing) => set_products.set(listing),
            Err(err) => log::error!("failed to fetch product listing: {err}"),
        }
    });

    view! {
        <Title text="Store" />
        <Router>
            <div class="min-h-screen bg-gray-50 text-gray-900 font-sans">
                <Navbar />
                <main>
                    <Routes fallback=|| "Page not found.">
                        <Route path=path!("/") view=Home />
                        <Route
                            path=path!("/products")
                            view=move || view! { <Products products /> }
                        />
                        <Route path=path!("/product/:id") view=ProductDetail />
                    </Routes>
                </main>
            </div>
        </Router>
    }
}
