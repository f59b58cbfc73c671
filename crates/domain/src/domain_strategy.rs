use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which address families a lookup must resolve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DomainStrategy {
    #[default]
    AsIs,
    PreferIpv4,
    PreferIpv6,
    #[serde(rename = "ipv4_only")]
    UseIpv4,
    #[serde(rename = "ipv6_only")]
    UseIpv6,
}

impl DomainStrategy {
    pub fn as_str(&self) -> &'static str {
        match self {
            DomainStrategy::AsIs => "as_is",
            DomainStrategy::PreferIpv4 => "prefer_ipv4",
            DomainStrategy::PreferIpv6 => "prefer_ipv6",
            DomainStrategy::UseIpv4 => "ipv4_only",
            DomainStrategy::UseIpv6 => "ipv6_only",
        }
    }

    pub fn wants_ipv4(&self) -> bool {
        !matches!(self, DomainStrategy::UseIpv6)
    }

    pub fn wants_ipv6(&self) -> bool {
        !matches!(self, DomainStrategy::UseIpv4)
    }
}

impl fmt::Display for DomainStrategy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for DomainStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "" | "as_is" => Ok(DomainStrategy::AsIs),
            "prefer_ipv4" => Ok(DomainStrategy::PreferIpv4),
            "prefer_ipv6" => Ok(DomainStrategy::PreferIpv6),
            "ipv4_only" => Ok(DomainStrategy::UseIpv4),
            "ipv6_only" => Ok(DomainStrategy::UseIpv6),
            _ => Err(format!("Unknown domain strategy: {}", s)),
        }
    }
}
