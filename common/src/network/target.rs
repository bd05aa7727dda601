//! # Wake Target Model
//!
//! Defines where a magic packet is delivered.
//!
//! A target combines an IPv4 destination with a UDP port, both optional on
//! the way in:
//! * No address means the limited broadcast address `255.255.255.255`.
//! * No port means the discard port 9.

use std::fmt;
use std::net::{Ipv4Addr, SocketAddrV4};

use crate::error::WakeError;

/// Delivery port used when the caller does not pick one.
pub const DEFAULT_WAKE_PORT: u16 = 9;
/// The echo port, the other traditional wake port.
const ECHO_PORT: u16 = 7;
/// Explicit ports below this are reserved for well-known services.
const PORT_WINDOW_MIN: u16 = 1024;
/// Upper bound of the accepted port window. Not 65535.
const PORT_WINDOW_MAX: u16 = 65353;

/// Shortest textual IPv4 address, `0.0.0.0`.
const ADDR_LEN_MIN: usize = 7;
/// Longest textual IPv4 address, `255.255.255.255`.
const ADDR_LEN_MAX: usize = 15;

/// A validated delivery destination for a magic packet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WakeTarget {
    addr: Ipv4Addr,
    port: u16,
}

impl WakeTarget {
    /// Resolves the raw destination parts, applying the defaults for the
    /// absent ones.
    pub fn resolve(ip: Option<&str>, port: Option<u16>) -> Result<Self, WakeError> {
        Ok(Self {
            addr: parse_addr(ip)?,
            port: parse_port(port)?,
        })
    }

    pub fn socket_addr(&self) -> SocketAddrV4 {
        SocketAddrV4::new(self.addr, self.port)
    }

    pub fn addr(&self) -> Ipv4Addr {
        self.addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }
}

impl fmt::Display for WakeTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.addr, self.port)
    }
}

/// Parses the destination address, falling back to limited broadcast.
///
/// A character pre-check (exactly three dots, plausible length) runs before
/// the real parse so that shapes like `10.0.0` or bare hostnames fail with
/// the same error as unparsable literals.
fn parse_addr(raw: Option<&str>) -> Result<Ipv4Addr, WakeError> {
    let Some(raw) = raw.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(Ipv4Addr::BROADCAST);
    };

    let dots: usize = raw.chars().filter(|&c| c == '.').count();
    if dots != 3 || raw.len() < ADDR_LEN_MIN || raw.len() > ADDR_LEN_MAX {
        return Err(WakeError::AddressFormat(raw.to_string()));
    }

    raw.parse::<Ipv4Addr>()
        .map_err(|_| WakeError::AddressFormat(raw.to_string()))
}

/// Parses the destination port, falling back to the discard port.
fn parse_port(port: Option<u16>) -> Result<u16, WakeError> {
    let Some(port) = port else {
        return Ok(DEFAULT_WAKE_PORT);
    };

    match port {
        ECHO_PORT | DEFAULT_WAKE_PORT => Ok(port),
        PORT_WINDOW_MIN..=PORT_WINDOW_MAX => Ok(port),
        _ => Err(WakeError::PortRange(port)),
    }
}

// ╔════════════════════════════════════════════╗
// ║ ████████╗███████╗███████╗████████╗███████╗ ║
// ║ ╚══██╔══╝██╔════╝██╔════╝╚══██╔══╝██╔════╝ ║
// ║    ██║   █████╗  ███████╗   ██║   ███████╗ ║
// ║    ██║   ██╔══╝  ╚════██║   ██║   ╚════██║ ║
// ║    ██║   ███████╗███████║   ██║   ███████║ ║
// ║    ╚═╝   ╚══════╝╚══════╝   ╚═╝   ╚══════╝ ║
// ╚════════════════════════════════════════════╝
