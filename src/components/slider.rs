//! Auto-rotating image slider for the home page.
//!
//! One interval timer exists per non-empty slide set: whenever the set
//! changes length the previous timer is cancelled, the cursor resets to 0,
//! and a fresh timer starts only if there is something to rotate. The cursor
//! arithmetic lives in [`advance`] so the cyclic behavior is testable off the
//! browser.

use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::api::Product;

/// Milliseconds between slide advances.
pub const SLIDE_PERIOD_MS: u32 = 3_000;

/// Number of products projected into the home slider.
pub const SLIDE_COUNT: u32 = 5;

/// Next cursor position over a slide set of `len` images.
///
/// An empty set pins the cursor at 0; there is never a modulo by zero.
pub fn advance(cursor: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (cursor + 1) % len
    }
}

/// Project a product listing into its ordered slide set of image URLs.
pub fn slide_set(products: &[Product]) -> Vec<String> {
    products.iter().map(|p| p.image.clone()).collect()
}

#[component]
pub fn ImageSlider(#[prop(into)] images: Signal<Vec<String>>) -> impl IntoView {
    let (cursor, set_cursor) = signal(0usize);
    let timer = StoredValue::new_local(None::<Interval>);

    // One timer per slide-set generation: tear down before (re)starting so a
    // stale timer can never tick against a stale length.
    Effect::new(move || {
        let len = images.with(|imgs| imgs.len());
        timer.update_value(|slot| {
            if let Some(previous) = slot.take() {
                previous.cancel();
            }
        });
        set_cursor.set(0);
        if len == 0 {
            return;
        }
        timer.set_value(Some(Interval::new(SLIDE_PERIOD_MS, move || {
            set_cursor.update(|c| *c = advance(*c, len));
        })));
    });

    on_cleanup(move || {
        timer.update_value(|slot| {
            if let Some(interval) = slot.take() {
                interval.cancel();
            }
        });
    });

    view! {
        <div class="relative w-full max-w-xl h-80 mx-auto rounded-2xl overflow-hidden bg-white shadow-lg">
            {move || {
                images
                    .get()
                    .into_iter()
                    .enumerate()
                    .map(|(index, src)| {
                        view! {
                            <img
                                src=src
                                alt=format!("Slide {index}")
                                class=move || {
                                    if index == cursor.get() {
                                        "absolute inset-0 w-full h-full object-contain p-6 opacity-100 transition-opacity duration-700"
                                    } else {
                                        "absolute inset-0 w-full h-full object-contain p-6 opacity-0 transition-opacity duration-700"
                                    }
                                }
                            />
                        }
                    })
                    .collect_view()
            }}
        </div>
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
