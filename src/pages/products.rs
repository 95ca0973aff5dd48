use leptos::prelude::*;
use leptos_router::components::A;

use crate::api::{detail_href, Product};

/// Product grid. Pure rendering: the listing is fetched once by the shell
/// and passed in, so navigating here never refetches.
#[component]
pub fn Products(#[prop(into)] products: Signal<Vec<Product>>) -> impl IntoView {
    view! {
        <div class="pt-24 px-6 pb-16 max-w-6xl mx-auto">
            <div class="grid grid-cols-2 md:grid-cols-3 lg:grid-cols-4 gap-6">
                {move || {
                    products
                        .get()
                        .into_iter()
                        .map(|product| {
                            view! {
                                <A
                                    href=detail_href(product.id)
                                    attr:class="bg-white border border-gray-200 rounded-2xl p-4 flex flex-col items-center hover:shadow-lg transition-shadow"
                                >
                                    <img
                                        src=product.image
                                        alt=product.title.clone()
                                        class="h-40 object-contain mb-4"
                                    />
                                    <p class="text-sm text-gray-700 text-center line-clamp-2">
                                        {product.title}
                                    </p>
                                </A>
                            }
                        })
                        .collect_view()
                }}
            </div>
        </div>
    }
}
