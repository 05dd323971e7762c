pub mod issue_handler;
pub mod repository_handler;
