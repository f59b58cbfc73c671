pub mod hijack;
pub mod lifecycle;
pub mod registry;

use crate::dns::logger::TransportLogger;
use async_trait::async_trait;
use dns_transport_domain::{DomainStrategy, TransportConfig, TransportError};
use hickory_proto::op::Message;
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};
use tokio_util::sync::CancellationToken;

pub use hijack::HijackTransport;
pub use lifecycle::Lifecycle;
pub use registry::{TransportFactory, TransportRegistry};

/// TTL advertised on every record a transport synthesizes locally.
pub const DEFAULT_TTL: u32 = 600;

/// Pluggable DNS resolution backend.
///
/// The `ctx` passed to [`Transport::exchange`] and [`Transport::lookup`] is the
/// caller's per-call scope. Implementations are free to ignore it and only
/// honour their own lifecycle scope; the hijack transport does exactly that.
#[async_trait]
pub trait Transport: Send + Sync {
    fn name(&self) -> &str;

    /// One-time setup before first use. Idempotent.
    async fn start(&self) -> Result<(), TransportError>;

    /// Drops cached or negotiated session state without closing.
    fn reset(&self);

    /// Cancels the lifecycle scope. Safe to call repeatedly, never fails twice.
    fn close(&self) -> Result<(), TransportError>;

    /// `true` when `exchange` yields a complete message and `lookup` is not
    /// the intended entry point.
    fn raw(&self) -> bool;

    async fn exchange(
        &self,
        ctx: &CancellationToken,
        message: &Message,
    ) -> Result<Message, TransportError>;

    async fn lookup(
        &self,
        ctx: &CancellationToken,
        domain: &str,
        strategy: DomainStrategy,
    ) -> Result<Vec<IpAddr>, TransportError>;
}

/// Options a factory builds a transport from.
#[derive(Debug, Clone, Default)]
pub struct TransportOptions {
    pub name: String,
    pub address: String,
    /// Parent scope; the transport derives its lifecycle from it.
    pub context: CancellationToken,
    pub logger: TransportLogger,
    pub inet4_response: Option<Ipv4Addr>,
    pub inet6_response: Option<Ipv6Addr>,
}

impl TransportOptions {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
            ..Default::default()
        }
    }

    /// Builds options from a validated `[[transports]]` entry.
    pub fn from_config(config: &TransportConfig) -> Result<Self, TransportError> {
        let construction = |e: dns_transport_domain::ConfigError| {
            TransportError::Construction(format!("{}: {}", config.tag, e))
        };

        Ok(Self {
            name: config.tag.clone(),
            address: config.address.clone(),
            inet4_response: config.inet4().map_err(construction)?,
            inet6_response: config.inet6().map_err(construction)?,
            ..Default::default()
        })
    }

    pub fn with_context(mut self, context: CancellationToken) -> Self {
        self.context = context;
        self
    }

    pub fn with_logger(mut self, logger: TransportLogger) -> Self {
        self.logger = logger;
        self
    }

    pub fn with_inet4_response(mut self, addr: Ipv4Addr) -> Self {
        self.inet4_response = Some(addr);
        self
    }

    pub fn with_inet6_response(mut self, addr: Ipv6Addr) -> Self {
        self.inet6_response = Some(addr);
        self
    }

    /// URL scheme of the address (`hijack` for `hijack://`), if it carries one.
    pub fn scheme(&self) -> Option<&str> {
        self.address
            .split_once("://")
            .map(|(scheme, _)| scheme)
            .filter(|scheme| !scheme.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheme_extraction() {
        assert_eq!(TransportOptions::new("a", "hijack://").scheme(), Some("hijack"));
        assert_eq!(
            TransportOptions::new("a", "https://1.1.1.1/dns-query").scheme(),
            Some("https")
        );
        assert_eq!(TransportOptions::new("a", "hijack").scheme(), None);
        assert_eq!(TransportOptions::new("a", "://x").scheme(), None);
    }

    #[test]
    fn test_from_config_carries_addresses() {
        let mut config = TransportConfig::new("local", "hijack");
        config.inet4_response = Some("192.0.2.1".to_string());
        config.inet6_response = Some("2001:db8::1".to_string());

        let options = TransportOptions::from_config(&config).unwrap();

        assert_eq!(options.name, "local");
        assert_eq!(options.inet4_response, Some(Ipv4Addr::new(192, 0, 2, 1)));
        assert_eq!(options.inet6_response, Some("2001:db8::1".parse().unwrap()));
        assert!(!options.logger.is_present());
    }

    #[test]
    fn test_from_config_rejects_bad_address() {
        let mut config = TransportConfig::new("local", "hijack");
        config.inet4_response = Some("not-an-ip".to_string());

        let result = TransportOptions::from_config(&config);
        assert!(matches!(result, Err(TransportError::Construction(_))));
    }
}
