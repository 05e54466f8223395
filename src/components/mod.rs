pub mod review_form;
pub mod review_modal;
pub mod reviews_list;
