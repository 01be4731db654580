pub mod app_config;
pub mod converter;
pub mod error;
pub mod resource;
pub mod resource_data;
pub mod schema;
pub mod startup;
