pub mod analysis;
pub mod auth;
pub mod environment;
pub mod project;
pub mod report;
