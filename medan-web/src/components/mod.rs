pub mod add_category_modal;
pub mod confirm_modal;
pub mod error_view;
pub mod loading;
pub mod search_box;
pub mod stat_card;
