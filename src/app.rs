/// Main application entry point for the clinic reviews site.
/// Owns the canonical testimonial list and decides when the reviews modal is shown.
use leptos::*;
use leptos::logging::log;
use leptos_meta::*;
use leptos_router::*;
use crate::components::review_modal::ReviewModal;
use crate::models::testimonial::{seed_testimonials, DraftReview, Testimonial};
use uuid::Uuid;

#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/testimonials.css"/>
        <Title text="Patient Reviews"/>
        <Router>
            <main>
                <Routes>
                    <Route path="" view=HomePage/>
                </Routes>
            </main>
        </Router>
    }
}

#[component]
fn HomePage() -> impl IntoView {
    let initial = seed_testimonials().unwrap_or_else(|err| {
        log!("[APP] Could not load seed testimonials: {}", err);
        Vec::new()
    });

    // Signal to store and update the list of testimonials.
    let (testimonials, set_testimonials) = create_signal(initial);
    let (is_open, set_open) = create_signal(false);

    // New reviews get their identifier here and go to the end of the list.
    let add_review = move |draft: DraftReview| {
        let id = Uuid::new_v4().to_string();
        log!("[APP] Adding review {} from {}", id, draft.name);
        set_testimonials.update(|list| list.push(Testimonial::from_draft(id, draft)));
    };

    view! {
        <section class="hero">
            <h1>{ "What our patients say" }</h1>
            <p>{move || format!("{} reviews and counting", testimonials.with(Vec::len))}</p>
            <button type="button" class="open-reviews" on:click=move |_| set_open.set(true)>
                { "Read Reviews" }
            </button>
        </section>
        <ReviewModal
            is_open=is_open
            on_close=move |_: ()| set_open.set(false)
            testimonials=testimonials
            on_add_review=add_review
        />
    }
}
