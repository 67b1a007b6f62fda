pub mod home;
pub mod repo;
pub mod site;
