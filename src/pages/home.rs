use leptos::prelude::*;

use crate::api;
use crate::components::slider::{slide_set, ImageSlider, SLIDE_COUNT};

#[component]
pub fn Home() -> impl IntoView {
    let (images, set_images) = signal(Vec::<String>::new());

    leptos::task::spawn_local(async move {
        match api::list_products(Some(SLIDE_COUNT)).await {
            Ok(products) => set_images.set(slide_set(&products)),
            Err(err) => log::error!("failed to fetch slider images: {err}"),
        }
    });

    view! {
        <div class="pt-24 px-6 pb-16 text-center space-y-10">
            <h1 class="text-4xl md:text-5xl font-black text-gray-900 tracking-tight">
                "Welcome to Store"
            </h1>

            <ImageSlider images />

            <p class="text-lg text-gray-500 max-w-xl mx-auto leading-relaxed">
                "Explore our amazing products!"
                <br />
                "Head over to the products section to see the full catalog."
            </p>
        </div>
    }
}
