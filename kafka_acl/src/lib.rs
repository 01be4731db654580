pub mod acl;
pub mod client;
pub mod commands;
pub mod connection_settings;
pub mod error;
pub mod queries;
pub mod resource_id;
pub mod state;
pub mod testing;

mod cluster_check;
