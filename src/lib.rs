pub mod data_source;
pub mod http_client;
pub mod loader;
pub mod metrics;
pub mod numeric;
pub mod performance;
pub mod rankings;
pub mod roles;
pub mod snapshot;
pub mod state;
pub mod table;
pub mod trends;
