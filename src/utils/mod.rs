pub mod app_config;
pub mod db;
pub mod errors;
pub mod traits;
