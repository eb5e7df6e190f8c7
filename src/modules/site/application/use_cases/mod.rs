pub mod fetch_home;
pub mod search_certificates;
pub mod search_projects;
