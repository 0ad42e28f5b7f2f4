use crate::core::fixture::ClientFixture;
use crate::domain::model::ClusterInfo;
use crate::domain::ports::{ConfigProvider, SearchTransport};
use crate::utils::error::{Result, SearchError};
use std::io::Write;

#[derive(Debug, Clone, PartialEq)]
pub struct ProbeReport {
    pub client: String,
    /// `None` when connectivity was not checked.
    pub reachable: Option<bool>,
    pub cluster: Option<ClusterInfo>,
}

pub struct ConnectionProbe<C: ConfigProvider> {
    config: C,
}

impl<C: ConfigProvider> ConnectionProbe<C> {
    pub fn new(config: C) -> Self {
        Self { config }
    }

    pub async fn run<W: Write>(&self, out: &mut W) -> Result<ProbeReport> {
        tracing::info!("Setting up search client");
        let mut fixture = ClientFixture::set_up(&self.config)?;

        let line = fixture.describe().ok_or(SearchError::NotConfigured)?;
        writeln!(out, "{}", line)?;

        let client = fixture.client().ok_or(SearchError::NotConfigured)?;
        let mut report = ProbeReport {
            client: client.to_string(),
            reachable: None,
            cluster: None,
        };

        if self.config.verify_connectivity() {
            tracing::info!("Checking connectivity");
            let reachable = client.ping().await?;
            writeln!(out, "reachable={}", reachable)?;
            report.reachable = Some(reachable);

            if reachable {
                let cluster = client.info().await?;
                tracing::info!("Connected to {}", cluster);
                writeln!(out, "cluster={}", cluster)?;
                report.cluster = Some(cluster);
            } else {
                tracing::warn!("Node answered the ping with a failure status");
            }
        }

        fixture.tear_down()?;
        tracing::info!("Search client closed");
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::DEFAULT_ENDPOINT;
    use std::time::Duration;

    struct ProbeConfig {
        endpoints: Vec<String>,
        verify: bool,
    }

    impl ConfigProvider for ProbeConfig {
        fn endpoints(&self) -> &[String] {
            &self.endpoints
        }

        fn request_timeout(&self) -> Option<Duration> {
            Some(Duration::from_secs(5))
        }

        fn verify_connectivity(&self) -> bool {
            self.verify
        }
    }

    #[tokio::test]
    async fn test_probe_without_verification_sends_nothing() {
        let probe = ConnectionProbe::new(ProbeConfig {
            endpoints: vec![DEFAULT_ENDPOINT.to_string()],
            verify: false,
        });

        let mut out = Vec::new();
        let report = probe.run(&mut out).await.unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "client=SearchClient{nodes=[http://192.168.63.128:9200], state=open}\n"
        );
        assert_eq!(report.reachable, None);
        assert!(report.cluster.is_none());
    }

    #[tokio::test]
    async fn test_probe_rejects_invalid_endpoint() {
        let probe = ConnectionProbe::new(ProbeConfig {
            endpoints: vec!["not a url".to_string()],
            verify: false,
        });

        let mut out = Vec::new();
        let result = probe.run(&mut out).await;
        assert!(matches!(
            result,
            Err(SearchError::InvalidConfigValueError { .. })
        ));
        assert!(out.is_empty());
    }
}
