//! Helpers shared by the end-to-end tests.

use std::net::UdpSocket;
use std::ops::RangeInclusive;
use std::time::Duration;

use anyhow::Context;

/// Explicit destination ports the validator accepts.
const PORT_WINDOW: RangeInclusive<u16> = 1024..=65353;

/// Binds a loopback listener on an ephemeral port inside the accepted
/// window. Ephemeral allocation practically never leaves the window, but
/// retry rather than flake when it does.
pub fn bind_listener() -> anyhow::Result<UdpSocket> {
    for _ in 0..8 {
        let socket = UdpSocket::bind("127.0.0.1:0").context("binding loopback listener")?;
        let port = socket
            .local_addr()
            .context("reading listener address")?
            .port();
        if PORT_WINDOW.contains(&port) {
            socket
                .set_read_timeout(Some(Duration::from_secs(2)))
                .context("arming read timeout")?;
            return Ok(socket);
        }
    }
    anyhow::bail!("could not get an ephemeral port inside {PORT_WINDOW:?}")
}
