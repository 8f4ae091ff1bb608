pub mod assign_user;
pub mod link_tag;
