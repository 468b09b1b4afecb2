pub mod app_state;
pub mod form_state;
