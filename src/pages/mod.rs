//! Page components, one per route.

pub mod dashboard;
pub mod extraction;
pub mod history;
pub mod login;
pub mod upload;
pub mod users;
