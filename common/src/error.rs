use std::io;

use thiserror::Error;

/// Failures the wake pipeline knows how to explain to the user.
///
/// Anything not covered here is treated as unexpected and rendered with
/// its full cause chain at the orchestration boundary.
#[derive(Debug, Error)]
pub enum WakeError {
    /// The caller supplied no hardware address at all.
    #[error("no hardware address was given")]
    MissingMac,
    /// The stripped hardware address is not exactly 12 digits long.
    #[error("hardware address `{raw}` has {found} digits after stripping separators, expected 12")]
    MacLength { raw: String, found: usize },
    /// The destination does not look like a dotted-decimal IPv4 address.
    #[error("`{0}` is not a dotted-decimal IPv4 address")]
    AddressFormat(String),
    /// The port lies outside the accepted set.
    #[error("port {0} is not allowed, use 7, 9 or a value within 1024-65353")]
    PortRange(u16),
    /// The UDP channel could not be brought into a ready state.
    #[error("wake channel could not be prepared: {0}")]
    Channel(io::Error),
}
