pub mod auth;
pub mod case_studies;
pub mod contact;
pub mod events;
pub mod health;
pub mod media;
pub mod portfolio;
pub mod projects;
pub mod resume;
