use std::time::Duration;

use async_trait::async_trait;
use tokio::net::TcpStream;

/// Answers whether a translation request is worth attempting
#[async_trait]
pub trait Connectivity: Send + Sync {
    async fn is_online(&self) -> bool;
}

/// Used when the reachability check is disabled
pub struct AlwaysOnline;

#[async_trait]
impl Connectivity for AlwaysOnline {
    async fn is_online(&self) -> bool {
        true
    }
}

/// Opens (and immediately drops) a TCP connection to the API host
pub struct TcpProbe {
    address: String,
    timeout: Duration,
}

impl TcpProbe {
    pub fn new(address: String, timeout: Duration) -> Self {
        Self { address, timeout }
    }
}

#[async_trait]
impl Connectivity for TcpProbe {
    async fn is_online(&self) -> bool {
        match tokio::time::timeout(self.timeout, TcpStream::connect(&self.address)).await {
            Ok(Ok(_)) => true,
            Ok(Err(e)) => {
                tracing::debug!("Probe to {} failed: {e}", self.address);
                false
            }
            Err(_) => {
                tracing::debug!("Probe to {} timed out after {:?}", self.address, self.timeout);
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use tokio::net::TcpListener;

    use super::*;

    #[tokio::test]
    async fn probe_reaches_listening_socket() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();

        let probe = TcpProbe::new(address, Duration::from_secs(1));
        assert!(probe.is_online().await);
    }

    #[tokio::test]
    async fn probe_fails_on_closed_port() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap().to_string();
        drop(listener);

        let probe = TcpProbe::new(address, Duration::from_secs(1));
        assert!(!probe.is_online().await);
    }

    #[tokio::test]
    async fn always_online_is_online() {
        assert!(AlwaysOnline.is_online().await);
    }
}
