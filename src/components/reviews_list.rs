/// List pane of the reviews modal: aggregate score, mobile "Write Review" button and one card per testimonial.
use leptos::*;
use crate::models::review_modal::{format_display_rating, list_pane_class, star_fills, write_button_class, ReviewModalState};
use crate::models::testimonial::{Rating, Testimonial};

#[component]
pub fn StarRow(rating: Rating) -> impl IntoView {
    view! {
        <div class="star-row" title=rating.to_string()>
            {star_fills(rating).into_iter().map(|filled| {
                let class = if filled { "star filled" } else { "star outline" };
                view! { <span class=class>{ "★" }</span> }
            }).collect::<Vec<_>>()}
        </div>
    }
}

#[component]
pub fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initial = testimonial.initial();

    view! {
        <article class="testimonial-card">
            <div class="card-header">
                <div class="reviewer">
                    <div class="avatar">{ initial }</div>
                    <div>
                        <h4 class="reviewer-name">{ testimonial.name }</h4>
                        <div class="reviewer-location">
                            <span class="pin">{ "📍" }</span>
                            { testimonial.location }
                        </div>
                    </div>
                </div>
                <StarRow rating=testimonial.rating />
            </div>
            <p class="testimonial-text">{ format!("\u{201c}{}\u{201d}", testimonial.text) }</p>
        </article>
    }
}

#[component]
pub fn ReviewsList(
    testimonials: MaybeSignal<Vec<Testimonial>>,
    display_rating: f32,
    state: RwSignal<ReviewModalState>,
) -> impl IntoView {
    let count = testimonials.clone();

    view! {
        <div class=move || state.with(list_pane_class)>
            <div class="list-toolbar">
                <div class="aggregate">
                    <span class="aggregate-score">{ format_display_rating(display_rating) }</span>
                    <div class="aggregate-meta">
                        <div class="aggregate-stars">
                            {(0..5).map(|_| view! { <span class="aggregate-star">{ "★" }</span> }).collect::<Vec<_>>()}
                        </div>
                        <span class="review-count">
                            {move || format!("based on {} reviews", count.with(Vec::len))}
                        </span>
                    </div>
                </div>
                <button
                    type="button"
                    class=move || state.with(write_button_class)
                    on:click=move |_| state.update(ReviewModalState::start_adding)
                >
                    { "+ Write Review" }
                </button>
            </div>
            <div class="testimonial-grid">
                {move || testimonials.get().into_iter().map(|testimonial| view! {
                    <TestimonialCard testimonial=testimonial />
                }).collect::<Vec<_>>()}
            </div>
        </div>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn testimonial(id: &str, name: &str, rating: u8) -> Testimonial {
        Testimonial {
            id: id.into(),
            name: name.into(),
            location: "Kolkata".into(),
            text: "Great care".into(),
            rating: Rating::try_from(rating).unwrap(),
        }
    }

    fn render(view: impl FnOnce() -> View) -> String {
        let runtime = create_runtime();
        let html = view().render_to_string().to_string();
        runtime.dispose();
        html
    }

    #[test]
    fn test_star_row_fills_up_to_rating() {
        for stars in 1..=5u8 {
            let html = render(move || view! { <StarRow rating=Rating::try_from(stars).unwrap() /> }.into_view());
            assert_eq!(html.matches("star filled\"").count(), usize::from(stars));
            assert_eq!(html.matches("star outline\"").count(), usize::from(5 - stars));
        }
    }

    #[test]
    fn test_card_shows_reviewer_details() {
        let html = render(|| view! { <TestimonialCard testimonial=testimonial("1", "Anya", 4) /> }.into_view());
        assert!(html.contains("Anya"));
        assert!(html.contains("Kolkata"));
        assert!(html.contains("Great care"));
        assert!(html.contains("class=\"avatar\""));
        assert_eq!(html.matches("star filled\"").count(), 4);
    }

    #[test]
    fn test_list_keeps_input_order() {
        let html = render(|| {
            let state = create_rw_signal(ReviewModalState::default());
            let list = vec![
                testimonial("1", "Zara", 3),
                testimonial("2", "Anya", 5),
                testimonial("3", "Mira", 1),
            ];
            view! { <ReviewsList testimonials=MaybeSignal::Static(list) display_rating=4.9 state=state /> }
                .into_view()
        });
        assert_eq!(html.matches("class=\"testimonial-card\"").count(), 3);
        let zara = html.find("Zara").unwrap();
        let anya = html.find("Anya").unwrap();
        let mira = html.find("Mira").unwrap();
        assert!(zara < anya && anya < mira);
        assert_eq!(html.matches("star filled\"").count(), 3 + 5 + 1);
        assert!(html.contains("based on 3 reviews"));
        assert!(html.contains("4.9"));
        assert_eq!(html.matches("class=\"aggregate-star\"").count(), 5);
    }

    #[test]
    fn test_list_pane_hidden_on_narrow_while_adding() {
        let html = render(|| {
            let state = create_rw_signal(ReviewModalState { is_adding: true, ..Default::default() });
            view! { <ReviewsList testimonials=MaybeSignal::Static(vec![]) display_rating=4.9 state=state /> }
                .into_view()
        });
        assert!(html.contains("list-pane narrow-hidden\""));
        assert!(html.contains("write-review narrow-only narrow-hidden\""));
        assert!(html.contains("based on 0 reviews"));
    }
}
