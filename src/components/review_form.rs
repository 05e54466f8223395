use leptos::*;
use leptos::ev::SubmitEvent;
use crate::models::review_modal::{form_pane_class, FieldUpdate, ReviewModalState};
use crate::models::testimonial::Rating;

/// Form pane for writing a new review. Submission is handed to `on_submit`;
/// the browser blocks it first while a `required` control is empty.
#[component]
pub fn ReviewForm(
    state: RwSignal<ReviewModalState>,
    #[prop(into)] on_submit: Callback<()>,
) -> impl IntoView {
    let edit = move |update: FieldUpdate| state.update(|s| s.set_field(update));

    let handle_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        on_submit.call(());
    };

    view! {
        <div class=move || state.with(form_pane_class)>
            <div class="form-header">
                <h3>{ "Share Your Experience" }</h3>
                {move || state.with(|s| s.narrow_layout().show_cancel_button).then(|| view! {
                    <button
                        type="button"
                        class="cancel-adding narrow-only"
                        title="Back to reviews"
                        on:click=move |_| state.update(ReviewModalState::cancel_adding)
                    >
                        { "×" }
                    </button>
                })}
            </div>
            <form class="review-form" on:submit=handle_submit>
                <label for="review-name">{ "Your Name" }</label>
                <input
                    id="review-name"
                    required
                    type="text"
                    placeholder="John Doe"
                    prop:value=move || state.with(|s| s.draft.name.clone())
                    on:input=move |e| edit(FieldUpdate::Name(event_target_value(&e)))
                />

                <label for="review-location">{ "Location" }</label>
                <input
                    id="review-location"
                    required
                    type="text"
                    placeholder="e.g. Barrackpore"
                    prop:value=move || state.with(|s| s.draft.location.clone())
                    on:input=move |e| edit(FieldUpdate::Location(event_target_value(&e)))
                />

                <label>{ "Rating" }</label>
                <div class="rating-picker">
                    {Rating::all().map(|star| view! {
                        <button
                            type="button"
                            class=move || if state.with(|s| star <= s.draft.rating) { "rating-star selected" } else { "rating-star" }
                            title=format!("{} star", star.get())
                            on:click=move |_| edit(FieldUpdate::Rating(star))
                        >
                            { "★" }
                        </button>
                    }).collect::<Vec<_>>()}
                </div>

                <label for="review-text">{ "Review" }</label>
                <textarea
                    id="review-text"
                    required
                    rows="4"
                    placeholder="Tell us about your visit..."
                    prop:value=move || state.with(|s| s.draft.text.clone())
                    on:input=move |e| edit(FieldUpdate::Text(event_target_value(&e)))
                />

                <button type="submit" class="submit-review">{ "Submit Review" }</button>
                <p class="disclaimer">
                    { "By submitting, you agree that your review can be displayed publicly on our website." }
                </p>
            </form>
        </div>
    }
}
