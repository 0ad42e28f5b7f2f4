pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;
pub use config::TomlConfig;

pub use core::{client::SearchClient, fixture::ClientFixture, probe::ConnectionProbe};
pub use domain::model::{ClusterInfo, Endpoint, DEFAULT_ENDPOINT};
pub use domain::ports::{ConfigProvider, SearchTransport};
pub use utils::error::{Result, SearchError};
