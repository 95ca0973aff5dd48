use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[component]
pub fn Navbar() -> impl IntoView {
    let location = use_location();
    let pathname = move || location.pathname.get();

    let is_home = move || pathname() == "/";
    let is_products = move || pathname().starts_with("/product");

    let link_class = |active: bool| {
        if active {
            "text-sm font-medium transition-colors text-gray-900"
        } else {
            "text-sm font-medium transition-colors text-gray-500 hover:text-gray-900"
        }
    };

    view! {
        <header class="fixed top-0 left-0 right-0 z-50 bg-white/80 backdrop-blur-md border-b border-gray-200">
            <div class="max-w-6xl mx-auto px-6 h-16 flex items-center justify-between">
                <A href="/" attr:class="font-bold text-gray-900 text-lg tracking-tight">
                    "Store"
                </A>

                <nav class="flex items-center space-x-8">
                    <ul class="flex items-center space-x-8">
                        <li>
                            <A href="/" attr:class=move || link_class(is_home())>
                                "Home"
                            </A>
                        </li>
                        <li>
                            <A href="/products" attr:class=move || link_class(is_products())>
                                "Products"
                            </A>
                        </li>
                    </ul>
                </nav>
            </div>
        </header>
    }
}
