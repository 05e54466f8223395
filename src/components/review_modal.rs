//! Reviews modal: the testimonial list next to a "write a review" form.
//!
//! The owner keeps the canonical list and the open flag. The modal only keeps
//! the draft and the narrow-screen list/form toggle, both of which survive a
//! close and reopen because the component stays mounted while hidden.
use leptos::*;
use leptos::logging::log;
use crate::components::{review_form::ReviewForm, reviews_list::ReviewsList};
use crate::models::review_modal::{ReviewModalState, DEFAULT_DISPLAY_RATING};
use crate::models::testimonial::{DraftReview, Testimonial};

#[component]
pub fn ReviewModal(
    #[prop(into)] is_open: MaybeSignal<bool>,
    #[prop(into)] on_close: Callback<()>,
    #[prop(into)] testimonials: MaybeSignal<Vec<Testimonial>>,
    #[prop(into)] on_add_review: Callback<DraftReview>,
    /// Score shown above the list; falls back to the fixed site-wide figure.
    #[prop(optional)]
    display_rating: Option<f32>,
) -> impl IntoView {
    let state = create_rw_signal(ReviewModalState::default());
    let display_rating = display_rating.unwrap_or(DEFAULT_DISPLAY_RATING);

    let close = move |_: ev::MouseEvent| close_modal(on_close);
    let submit = Callback::new(move |_: ()| {
        submit_review(state, on_add_review);
    });

    move || {
        is_open.get().then(|| view! {
            <div class="review-modal">
                <div class="modal-backdrop" on:click=close></div>
                <div class="modal-panel" role="dialog" aria-modal="true">
                    <div class="modal-header">
                        <div>
                            <h2>{ "Patient Reviews" }</h2>
                            <p class="modal-subtitle">{ "Real stories from our community" }</p>
                        </div>
                        <button type="button" class="modal-close" title="Close" on:click=close>
                            { "×" }
                        </button>
                    </div>
                    <div class="modal-content">
                        <ReviewsList
                            testimonials=testimonials.clone()
                            display_rating=display_rating
                            state=state
                        />
                        <ReviewForm state=state on_submit=submit />
                    </div>
                </div>
            </div>
        })
    }
}

fn close_modal(on_close: Callback<()>) {
    log!("[MODAL] Closing reviews modal");
    on_close.call(());
}

/// Moves a complete draft out of the form and hands it to the owner.
/// Returns whether the owner was called.
fn submit_review(state: RwSignal<ReviewModalState>, on_add_review: Callback<DraftReview>) -> bool {
    // The callback runs after the state update has finished so the owner may touch signals freely.
    match state.try_update(ReviewModalState::submit) {
        Some(Ok(review)) => {
            log!("[MODAL] Submitting review from {} ({})", review.name, review.rating);
            on_add_review.call(review);
            true
        }
        Some(Err(err)) => {
            log!("[MODAL] Review not submitted: {}", err);
            false
        }
        None => {
            log!("[MODAL] Review state already disposed");
            false
        }
    }
}
