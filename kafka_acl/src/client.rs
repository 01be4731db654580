mod api_client;
mod cluster;
mod http_client;

pub use api_client::*;
pub use cluster::*;
pub use http_client::*;
