//! View-model behind the reviews modal.
//! Holds the mobile list/form toggle and the review being written; knows nothing about the DOM.
use crate::models::testimonial::{DraftReview, Rating, ReviewError};

/// Aggregate score shown above the list when the owner does not supply one.
pub const DEFAULT_DISPLAY_RATING: f32 = 4.9;

/// A single edit coming from one of the form controls.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldUpdate {
    Name(String),
    Location(String),
    Text(String),
    Rating(Rating),
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReviewModalState {
    pub is_adding: bool,
    pub draft: DraftReview,
}

impl ReviewModalState {
    /// Layout below the breakpoint, where the toggle decides what shows.
    /// Above it the stylesheet keeps both panes up and hides the toggle controls.
    pub fn narrow_layout(&self) -> PaneLayout {
        PaneLayout::for_viewport(Viewport::Narrow, self.is_adding)
    }

    pub fn start_adding(&mut self) {
        self.is_adding = true;
    }

    /// Back to the list; whatever was typed stays in the draft.
    pub fn cancel_adding(&mut self) {
        self.is_adding = false;
    }

    pub fn set_field(&mut self, update: FieldUpdate) {
        match update {
            FieldUpdate::Name(name) => self.draft.name = name,
            FieldUpdate::Location(location) => self.draft.location = location,
            FieldUpdate::Text(text) => self.draft.text = text,
            FieldUpdate::Rating(rating) => self.draft.rating = rating,
        }
    }

    /// Takes the finished draft out of the form and returns to the list.
    /// Leaves the state untouched when a required field is empty.
    pub fn submit(&mut self) -> Result<DraftReview, ReviewError> {
        self.draft.validate()?;
        self.is_adding = false;
        Ok(std::mem::take(&mut self.draft))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Viewport {
    Narrow,
    Wide,
}

/// Which panes are on screen and whether the mobile-only controls show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PaneLayout {
    pub list_visible: bool,
    pub form_visible: bool,
    pub show_write_button: bool,
    pub show_cancel_button: bool,
}

impl PaneLayout {
    pub fn for_viewport(viewport: Viewport, is_adding: bool) -> Self {
        match viewport {
            Viewport::Wide => PaneLayout {
                list_visible: true,
                form_visible: true,
                show_write_button: false,
                show_cancel_button: false,
            },
            Viewport::Narrow => PaneLayout {
                list_visible: !is_adding,
                form_visible: is_adding,
                show_write_button: !is_adding,
                show_cancel_button: is_adding,
            },
        }
    }
}

/// CSS classes for the list pane. `narrow-hidden` only applies below the breakpoint.
pub fn list_pane_class(state: &ReviewModalState) -> &'static str {
    if state.narrow_layout().list_visible {
        "pane list-pane"
    } else {
        "pane list-pane narrow-hidden"
    }
}

pub fn form_pane_class(state: &ReviewModalState) -> &'static str {
    if state.narrow_layout().form_visible {
        "pane form-pane"
    } else {
        "pane form-pane narrow-hidden"
    }
}

/// `narrow-only` hides the button above the breakpoint.
pub fn write_button_class(state: &ReviewModalState) -> &'static str {
    if state.narrow_layout().show_write_button {
        "write-review narrow-only"
    } else {
        "write-review narrow-only narrow-hidden"
    }
}

/// Fill state of the five stars for a rating, left to right.
pub fn star_fills(rating: Rating) -> [bool; 5] {
    let mut fills = [false; 5];
    for (i, fill) in fills.iter_mut().enumerate() {
        *fill = i < usize::from(rating.get());
    }
    fills
}

pub fn format_display_rating(value: f32) -> String {
    format!("{:.1}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rating(value: u8) -> Rating {
        Rating::try_from(value).unwrap()
    }

    fn filled_state() -> ReviewModalState {
        let mut state = ReviewModalState::default();
        state.start_adding();
        state.set_field(FieldUpdate::Name("Ravi".into()));
        state.set_field(FieldUpdate::Location("Howrah".into()));
        state.set_field(FieldUpdate::Text("Good visit".into()));
        state
    }

    #[test]
    fn test_initial_state() {
        let state = ReviewModalState::default();
        assert!(!state.is_adding);
        assert_eq!(state.draft, DraftReview::default());
    }

    #[test]
    fn test_cancel_keeps_draft() {
        let mut state = ReviewModalState::default();
        state.start_adding();
        assert!(state.is_adding);
        state.set_field(FieldUpdate::Name("Half written".into()));
        state.cancel_adding();
        assert!(!state.is_adding);
        assert_eq!(state.draft.name, "Half written");
    }

    #[test]
    fn test_set_field_touches_one_field() {
        let mut state = filled_state();
        state.set_field(FieldUpdate::Rating(rating(2)));
        assert_eq!(state.draft.rating.get(), 2);
        assert_eq!(state.draft.name, "Ravi");
        state.set_field(FieldUpdate::Location("Barrackpore".into()));
        assert_eq!(state.draft.location, "Barrackpore");
        assert_eq!(state.draft.text, "Good visit");
        assert_eq!(state.draft.rating.get(), 2);
    }

    #[test]
    fn test_submit_returns_draft_and_resets() {
        let mut state = filled_state();
        let submitted = state.submit().unwrap();
        assert_eq!(
            submitted,
            DraftReview {
                name: "Ravi".into(),
                location: "Howrah".into(),
                text: "Good visit".into(),
                rating: rating(5),
            }
        );
        assert_eq!(state, ReviewModalState::default());
    }

    #[test]
    fn test_submit_blocked_for_any_rating() {
        for stars in Rating::all() {
            for blank in 0..3 {
                let mut state = filled_state();
                state.set_field(FieldUpdate::Rating(stars));
                state.set_field(match blank {
                    0 => FieldUpdate::Name(String::new()),
                    1 => FieldUpdate::Location(String::new()),
                    _ => FieldUpdate::Text(String::new()),
                });
                let before = state.clone();
                assert!(matches!(state.submit(), Err(ReviewError::MissingField(_))));
                assert_eq!(state, before);
            }
        }
    }

    #[test]
    fn test_pane_layout_policy() {
        let wide = PaneLayout::for_viewport(Viewport::Wide, true);
        assert!(wide.list_visible && wide.form_visible);
        assert!(!wide.show_write_button && !wide.show_cancel_button);
        assert_eq!(wide, PaneLayout::for_viewport(Viewport::Wide, false));

        let listing = PaneLayout::for_viewport(Viewport::Narrow, false);
        assert!(listing.list_visible && !listing.form_visible && listing.show_write_button);

        let editing = PaneLayout::for_viewport(Viewport::Narrow, true);
        assert!(!editing.list_visible && editing.form_visible && editing.show_cancel_button);
    }

    #[test]
    fn test_pane_classes_follow_toggle() {
        let mut state = ReviewModalState::default();
        assert_eq!(list_pane_class(&state), "pane list-pane");
        assert_eq!(form_pane_class(&state), "pane form-pane narrow-hidden");
        assert_eq!(write_button_class(&state), "write-review narrow-only");
        assert!(!state.narrow_layout().show_cancel_button);

        state.start_adding();
        assert_eq!(list_pane_class(&state), "pane list-pane narrow-hidden");
        assert_eq!(form_pane_class(&state), "pane form-pane");
        assert_eq!(write_button_class(&state), "write-review narrow-only narrow-hidden");
        assert!(state.narrow_layout().show_cancel_button);
    }

    #[test]
    fn test_star_fills() {
        for stars in Rating::all() {
            let fills = star_fills(stars);
            let k = usize::from(stars.get());
            assert_eq!(fills.iter().filter(|f| **f).count(), k);
            assert!(fills[..k].iter().all(|f| *f));
        }
    }

    #[test]
    fn test_display_rating_format() {
        assert_eq!(format_display_rating(DEFAULT_DISPLAY_RATING), "4.9");
        assert_eq!(format_display_rating(4.0), "4.0");
    }
}
