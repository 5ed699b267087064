pub mod credentials;
pub mod daily_tasks;
pub mod delete_response;
pub mod error;
pub mod extractors;
pub mod login;
pub mod member_input;
pub mod projects;
pub mod sprints;
pub mod tasks;
pub mod users;
pub mod validation;
