pub mod get_home;
pub mod get_public_certificates;
pub mod get_public_projects;

pub use get_home::get_home_handler;
pub use get_public_certificates::get_public_certificates_handler;
pub use get_public_projects::get_public_projects_handler;
