mod enums;
mod member_ref;
mod project;
mod sprint;
mod task;
mod user;
