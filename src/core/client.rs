use crate::domain::model::{ClusterInfo, Endpoint};
use crate::domain::ports::SearchTransport;
use crate::utils::error::{Result, SearchError};
use async_trait::async_trait;
use elasticsearch::http::headers::{HeaderMap, HeaderName, HeaderValue};
use elasticsearch::http::transport::{
    MultiNodeConnectionPool, SingleNodeConnectionPool, TransportBuilder,
};
use elasticsearch::Elasticsearch;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone)]
pub struct ClientBuilder {
    endpoints: Vec<Endpoint>,
    request_timeout: Option<Duration>,
    headers: Vec<(String, String)>,
}

impl ClientBuilder {
    pub fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoints: vec![endpoint],
            request_timeout: None,
            headers: Vec::new(),
        }
    }

    /// Adds another node; duplicates are ignored.
    pub fn endpoint(mut self, endpoint: Endpoint) -> Self {
        if !self.endpoints.contains(&endpoint) {
            self.endpoints.push(endpoint);
        }
        self
    }

    pub fn request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = Some(timeout);
        self
    }

    pub fn default_header(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.push((name.into(), value.into()));
        self
    }

    fn header_map(&self) -> Result<HeaderMap> {
        let mut headers = HeaderMap::new();
        for (name, value) in &self.headers {
            let header_name = HeaderName::from_bytes(name.as_bytes()).map_err(|e| {
                SearchError::InvalidConfigValueError {
                    field: "headers".to_string(),
                    value: name.clone(),
                    reason: e.to_string(),
                }
            })?;
            let header_value =
                HeaderValue::from_str(value).map_err(|e| SearchError::InvalidConfigValueError {
                    field: format!("headers.{}", name),
                    value: value.clone(),
                    reason: e.to_string(),
                })?;
            headers.insert(header_name, header_value);
        }
        Ok(headers)
    }

    /// Builds the client. No request is sent: connections are opened lazily.
    ///
    /// One node uses a single-node pool; several nodes are used in
    /// round-robin order.
    pub fn build(self) -> Result<SearchClient> {
        let headers = self.header_map()?;

        let mut builder = match self.endpoints.as_slice() {
            [single] => TransportBuilder::new(SingleNodeConnectionPool::new(
                single.base_url().clone(),
            )),
            nodes => {
                let urls = nodes.iter().map(|e| e.base_url().clone()).collect();
                TransportBuilder::new(MultiNodeConnectionPool::round_robin(urls, None))
            }
        };
        builder = builder.headers(headers);
        if let Some(timeout) = self.request_timeout {
            builder = builder.timeout(timeout);
        }
        let transport = builder.build()?;

        let client = SearchClient {
            endpoints: self.endpoints,
            client: Some(Elasticsearch::new(transport)),
        };
        tracing::debug!("Created {}", client);
        Ok(client)
    }
}

/// Handle on one or more search nodes. Owns the `Elasticsearch` client and
/// its connection pool until [`SearchClient::close`] or drop.
#[derive(Debug)]
pub struct SearchClient {
    endpoints: Vec<Endpoint>,
    client: Option<Elasticsearch>,
}

impl SearchClient {
    pub fn builder(endpoint: Endpoint) -> ClientBuilder {
        ClientBuilder::new(endpoint)
    }

    pub fn new(endpoint: Endpoint) -> Result<Self> {
        Self::builder(endpoint).build()
    }

    pub fn endpoints(&self) -> &[Endpoint] {
        &self.endpoints
    }

    pub fn is_closed(&self) -> bool {
        self.client.is_none()
    }

    /// Releases pooled connections. Closing a closed client does nothing.
    pub fn close(&mut self) -> Result<()> {
        if !self.release() {
            tracing::trace!("Search client already closed");
        }
        Ok(())
    }

    /// Drops the underlying client; returns whether there was one to drop.
    fn release(&mut self) -> bool {
        match self.client.take() {
            Some(client) => {
                drop(client);
                tracing::debug!("Closed search client for {}", self.nodes_label());
                true
            }
            None => false,
        }
    }

    fn open_client(&self) -> Result<&Elasticsearch> {
        self.client.as_ref().ok_or(SearchError::ClientClosed)
    }

    fn nodes_label(&self) -> String {
        self.endpoints
            .iter()
            .map(|e| e.to_string())
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[async_trait]
impl SearchTransport for SearchClient {
    async fn ping(&self) -> Result<bool> {
        let response = self.open_client()?.ping().send().await?;
        tracing::debug!("Ping answered {}", response.status_code());
        Ok(response.status_code().is_success())
    }

    async fn info(&self) -> Result<ClusterInfo> {
        let response = self.open_client()?.info().send().await?;
        let status = response.status_code();
        if !status.is_success() {
            let endpoint = Endpoint::parse(response.url().as_str())
                .map(|e| e.to_string())
                .unwrap_or_else(|_| response.url().to_string());
            return Err(SearchError::UnexpectedStatus {
                endpoint,
                status: status.as_u16(),
            });
        }

        let info = response.json::<ClusterInfo>().await?;
        Ok(info)
    }
}

impl fmt::Display for SearchClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SearchClient{{nodes=[{}], state={}}}",
            self.nodes_label(),
            if self.is_closed() { "closed" } else { "open" }
        )
    }
}

impl Drop for SearchClient {
    fn drop(&mut self) {
        if self.release() {
            tracing::debug!("Search client dropped while open");
        }
    }
}
