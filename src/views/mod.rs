pub mod components;
pub mod dashboard;
pub mod layout;
