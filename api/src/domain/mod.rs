pub mod endpoint;
pub mod report;
pub mod user;
