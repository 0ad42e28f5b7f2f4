pub mod client;
pub mod fixture;
pub mod probe;

pub use crate::domain::model::{ClusterInfo, Endpoint};
pub use crate::domain::ports::{ConfigProvider, SearchTransport};
pub use crate::utils::error::Result;
