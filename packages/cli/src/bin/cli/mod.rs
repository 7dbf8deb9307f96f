pub mod account;
pub mod insights;
pub mod projects;
pub mod tasks;
pub mod utils;
