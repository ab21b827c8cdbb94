pub mod api;
pub mod api_utils;
pub mod components;
pub mod confirm_gate;
pub mod date_utils;
pub mod form_controller;
pub mod icons;
pub mod list_controller;
pub mod list_utils;
pub mod modal;

#[cfg(test)]
pub mod testing;
