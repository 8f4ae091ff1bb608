pub mod create_project;
pub mod delete_project;
pub mod list_projects;
pub mod members;
pub mod update_project;
