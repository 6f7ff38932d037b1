//! Sample datasets and local view state for the GLOF tracker pages.

pub mod analytics;
pub mod donations;
pub mod government;
pub mod home;
pub mod login;
pub mod organizations;
pub mod safety;
