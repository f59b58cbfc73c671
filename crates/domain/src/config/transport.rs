use super::errors::ConfigError;
use serde::{Deserialize, Serialize};
use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

/// One `[[transports]]` entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TransportConfig {
    pub tag: String,

    /// Either a bare scheme (`hijack`) or an address carrying one (`hijack://`).
    #[serde(default = "default_address")]
    pub address: String,

    #[serde(default)]
    pub inet4_response: Option<String>,

    #[serde(default)]
    pub inet6_response: Option<String>,
}

impl TransportConfig {
    pub fn new(tag: &str, address: &str) -> Self {
        Self {
            tag: tag.to_string(),
            address: address.to_string(),
            inet4_response: None,
            inet6_response: None,
        }
    }

    /// IPv4 answer for A queries. IPv4-mapped IPv6 literals are unmapped.
    pub fn inet4(&self) -> Result<Option<Ipv4Addr>, ConfigError> {
        let Some(raw) = self.inet4_response.as_deref() else {
            return Ok(None);
        };
        match self.parse_ip("inet4_response", raw)? {
            IpAddr::V4(addr) => Ok(Some(addr)),
            IpAddr::V6(addr) => addr.to_ipv4_mapped().map(Some).ok_or_else(|| {
                ConfigError::Validation(format!(
                    "Transport '{}': inet4_response '{}' is not an IPv4 address",
                    self.tag, raw
                ))
            }),
        }
    }

    /// IPv6 answer for AAAA queries.
    pub fn inet6(&self) -> Result<Option<Ipv6Addr>, ConfigError> {
        let Some(raw) = self.inet6_response.as_deref() else {
            return Ok(None);
        };
        match self.parse_ip("inet6_response", raw)? {
            IpAddr::V6(addr) => Ok(Some(addr)),
            IpAddr::V4(_) => Err(ConfigError::Validation(format!(
                "Transport '{}': inet6_response '{}' is not an IPv6 address",
                self.tag, raw
            ))),
        }
    }

    fn parse_ip(&self, field: &str, raw: &str) -> Result<IpAddr, ConfigError> {
        raw.trim().parse().map_err(|e| {
            ConfigError::Validation(format!(
                "Transport '{}': invalid {} '{}': {}",
                self.tag, field, raw, e
            ))
        })
    }
}

fn default_address() -> String {
    "hijack".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unset_responses_are_none() {
        let config = TransportConfig::new("local", "hijack");
        assert_eq!(config.inet4().unwrap(), None);
        assert_eq!(config.inet6().unwrap(), None);
    }

    #[test]
    fn test_mapped_ipv6_accepted_for_inet4() {
        let mut config = TransportConfig::new("local", "hijack");
        config.inet4_response = Some("::ffff:192.0.2.7".to_string());
        assert_eq!(config.inet4().unwrap(), Some(Ipv4Addr::new(192, 0, 2, 7)));
    }

    #[test]
    fn test_wrong_family_rejected() {
        let mut config = TransportConfig::new("local", "hijack");
        config.inet6_response = Some("192.0.2.1".to_string());
        assert!(matches!(config.inet6(), Err(ConfigError::Validation(_))));
    }
}
