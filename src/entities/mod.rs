pub mod prelude;

pub mod case_studies;
pub mod contact_messages;
pub mod media_items;
pub mod projects;
