pub mod media;
pub mod presentation;
pub mod resume;
pub mod storage;
