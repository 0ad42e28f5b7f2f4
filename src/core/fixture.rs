use crate::core::client::SearchClient;
use crate::domain::ports::ConfigProvider;
use crate::utils::error::{Result, SearchError};
use crate::utils::validation::validate_endpoints;

/// Owns one client for the length of one test case or probe run.
///
/// Starts unconfigured, holds a client after [`ClientFixture::set_up`] and
/// returns to holding nothing after [`ClientFixture::tear_down`]. Dropping a
/// fixture tears it down, so the client is released even if the body panics.
#[derive(Debug, Default)]
pub struct ClientFixture {
    client: Option<SearchClient>,
}

impl ClientFixture {
    pub fn unconfigured() -> Self {
        Self { client: None }
    }

    pub fn set_up<C: ConfigProvider>(config: &C) -> Result<Self> {
        let endpoints = validate_endpoints("endpoints", config.endpoints())?;
        let mut nodes = endpoints.into_iter();
        let first = nodes.next().ok_or_else(|| SearchError::MissingConfigError {
            field: "endpoints".to_string(),
        })?;

        let mut builder = SearchClient::builder(first);
        for endpoint in nodes {
            builder = builder.endpoint(endpoint);
        }
        if let Some(timeout) = config.request_timeout() {
            builder = builder.request_timeout(timeout);
        }
        if let Some(headers) = config.default_headers() {
            for (name, value) in headers {
                builder = builder.default_header(name.clone(), value.clone());
            }
        }

        let client = builder.build()?;
        tracing::debug!("Fixture set up with {}", client);
        Ok(Self {
            client: Some(client),
        })
    }

    pub fn client(&self) -> Option<&SearchClient> {
        self.client.as_ref()
    }

    pub fn is_configured(&self) -> bool {
        self.client.is_some()
    }

    /// The `client=<repr>` line printed by the connection test.
    pub fn describe(&self) -> Option<String> {
        self.client.as_ref().map(|client| format!("client={}", client))
    }

    /// Closes the client if there is one. Without a client this does nothing.
    pub fn tear_down(&mut self) -> Result<()> {
        if let Some(mut client) = self.client.take() {
            client.close()?;
            tracing::debug!("Fixture torn down");
        }
        Ok(())
    }
}

impl Drop for ClientFixture {
    fn drop(&mut self) {
        if let Err(e) = self.tear_down() {
            tracing::warn!("Failed to release search client: {}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DEFAULT_ENDPOINT;
    use std::time::Duration;

    struct StaticConfig {
        endpoints: Vec<String>,
    }

    impl ConfigProvider for StaticConfig {
        fn endpoints(&self) -> &[String] {
            &self.endpoints
        }

        fn request_timeout(&self) -> Option<Duration> {
            Some(Duration::from_secs(2))
        }

        fn verify_connectivity(&self) -> bool {
            false
        }
    }

    fn config(endpoints: &[&str]) -> StaticConfig {
        StaticConfig {
            endpoints: endpoints.iter().map(|e| e.to_string()).collect(),
        }
    }

    #[test]
    fn test_set_up_and_tear_down() {
        let mut fixture = ClientFixture::set_up(&config(&[DEFAULT_ENDPOINT])).unwrap();
        assert!(fixture.is_configured());
        assert_eq!(
            fixture.describe().unwrap(),
            "client=SearchClient{nodes=[http://192.168.63.128:9200], state=open}"
        );

        assert!(fixture.tear_down().is_ok());
        assert!(!fixture.is_configured());
        assert!(fixture.describe().is_none());
        // a second tear down has nothing left to close
        assert!(fixture.tear_down().is_ok());
    }

    #[test]
    fn test_tear_down_unconfigured_is_noop() {
        let mut fixture = ClientFixture::unconfigured();
        assert!(fixture.client().is_none());
        assert!(fixture.tear_down().is_ok());
    }

    #[test]
    fn test_set_up_rejects_bad_endpoint() {
        let result = ClientFixture::set_up(&config(&["ftp://192.168.63.128"]));
        assert!(matches!(
            result,
            Err(SearchError::InvalidConfigValueError { .. })
        ));

        let result = ClientFixture::set_up(&config(&[]));
        assert!(matches!(result, Err(SearchError::MissingConfigError { .. })));
    }

    #[test]
    fn test_set_up_multiple_nodes() {
        let fixture =
            ClientFixture::set_up(&config(&["http://10.0.0.1:9200", "10.0.0.2"])).unwrap();
        let client = fixture.client().unwrap();
        assert_eq!(client.endpoints().len(), 2);
        assert_eq!(client.endpoints()[1].to_string(), "http://10.0.0.2:9200");
    }
}
