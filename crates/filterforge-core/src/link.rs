//! Link-layer selection for compiled filters.

use std::fmt;

/// Framing the filter expression is compiled against.
///
/// Parsed from the request's `link` field; anything unrecognized falls back
/// to `Ipv4`, matching the service's historical default.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LinkLayer {
    /// Raw IPv4 payload.
    #[default]
    Ipv4,
    /// Raw IPv6 payload.
    Ipv6,
    /// Ethernet-framed packets.
    Eth,
    /// Raw bytes, no assumed framing.
    Raw,
}

impl LinkLayer {
    /// Map a request-supplied name onto the closed enum.
    pub fn from_name(name: &str) -> Self {
        match name {
            "ipv4" => LinkLayer::Ipv4,
            "ipv6" => LinkLayer::Ipv6,
            "eth" => LinkLayer::Eth,
            "raw" => LinkLayer::Raw,
            _ => LinkLayer::Ipv4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            LinkLayer::Ipv4 => "ipv4",
            LinkLayer::Ipv6 => "ipv6",
            LinkLayer::Eth => "eth",
            LinkLayer::Raw => "raw",
        }
    }

    /// Rule-insertion command for this link layer.
    ///
    /// `Eth` and `Raw` filters have no bytecode-matching firewall table to
    /// land in; callers must treat `None` as an unsupported request.
    pub fn insert_command(self) -> Option<&'static str> {
        match self {
            LinkLayer::Ipv4 => Some("iptables -I INPUT"),
            LinkLayer::Ipv6 => Some("ip6tables -I INPUT"),
            LinkLayer::Eth | LinkLayer::Raw => None,
        }
    }
}

impl fmt::Display for LinkLayer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
