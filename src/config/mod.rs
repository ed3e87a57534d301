//! Configuration module

mod site;

pub use site::DepartmentConfig;
pub use site::SiteConfig;
