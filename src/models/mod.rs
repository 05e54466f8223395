pub mod review_modal;
pub mod testimonial;
