pub mod api;
pub mod constants;
pub mod contact;
pub mod error;
pub mod models;
