pub mod portfolio;
pub mod resume;
