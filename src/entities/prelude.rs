pub use super::case_studies::Entity as CaseStudies;
pub use super::contact_messages::Entity as ContactMessages;
pub use super::media_items::Entity as MediaItems;
pub use super::projects::Entity as Projects;
