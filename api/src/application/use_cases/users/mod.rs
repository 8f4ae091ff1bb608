pub mod change_name;
pub mod get_profile;
pub mod resolve_user;
