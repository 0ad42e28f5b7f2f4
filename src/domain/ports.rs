use crate::domain::model::ClusterInfo;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::time::Duration;

pub trait ConfigProvider: Send + Sync {
    fn endpoints(&self) -> &[String];
    fn request_timeout(&self) -> Option<Duration>;
    fn verify_connectivity(&self) -> bool;

    fn default_headers(&self) -> Option<&HashMap<String, String>> {
        None
    }
}

/// Requests every search client must answer, whatever the transport.
#[async_trait]
pub trait SearchTransport: Send + Sync {
    async fn ping(&self) -> Result<bool>;
    async fn info(&self) -> Result<ClusterInfo>;
}
