pub mod about;
pub mod api;
pub mod contact;
pub mod index;
pub mod predictor;
pub mod projects;
pub mod r#static;
