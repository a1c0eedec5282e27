// Library for the binaries and tests

pub mod config;
pub mod dashboard;
pub mod error;
pub mod logging;
pub mod models;
pub mod routes;
pub mod sysinfo_repo;
pub mod version;
