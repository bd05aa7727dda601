//! The sending half of the pipeline.
//!
//! One call validates the request, opens a broadcast-capable UDP channel,
//! builds the payload and fires it in a single blocking write. Every
//! failure is contained here: the caller only ever sees a boolean.

use std::net::{Ipv4Addr, UdpSocket};

use anyhow::Context;
use pnet::util::MacAddr;
use tracing::{debug, error, warn};

use wakr_common::config::WakeRequest;
use wakr_common::error::WakeError;
use wakr_common::network::mac::MacString;
use wakr_common::network::target::WakeTarget;

use crate::magic::{MAGIC_PACKET_LEN, MagicPacket};

/// Runs the full wake pipeline for one request.
///
/// Returns `true` only when the channel reported the complete packet as
/// sent. Validation and transmission failures are logged and collapse to
/// `false`; none of them propagate to the caller.
pub fn wake(request: &WakeRequest) -> bool {
    match try_wake(request) {
        Ok(sent) if sent == MAGIC_PACKET_LEN => true,
        Ok(sent) => {
            warn!("magic packet was cut short, sent {sent} of {MAGIC_PACKET_LEN} bytes");
            false
        }
        Err(err) => {
            report_failure(&err);
            false
        }
    }
}

fn try_wake(request: &WakeRequest) -> anyhow::Result<usize> {
    debug!("validating hardware address `{}`", request.mac);
    let mac: MacString = MacString::parse(&request.mac)?;
    debug!("validated hardware address: {mac}");

    debug!("resolving destination address and port");
    let target: WakeTarget = WakeTarget::resolve(request.ip.as_deref(), request.port)?;
    debug!("resolved destination: {target}");

    debug!("connecting wake channel to {target}");
    let socket: UdpSocket = open_channel(&target)?;

    let mac_addr: MacAddr = mac
        .decode()
        .context("hardware address holds non-hexadecimal digits")?;
    debug!("building magic packet for {mac_addr}");
    let packet: MagicPacket = MagicPacket::new(&mac_addr);

    debug!("sending {MAGIC_PACKET_LEN} byte magic packet");
    let sent: usize = socket
        .send(packet.as_bytes())
        .context("transmitting the magic packet")?;
    debug!("bytes expected: {MAGIC_PACKET_LEN} | bytes sent: {sent}");

    Ok(sent)
}

/// Brings a UDP socket into a ready state for one send: bound to an
/// ephemeral port, connected to the target so a plain `send` hits it, and
/// allowed to address the broadcast domain.
///
/// The socket closes on scope exit whatever happens after this.
fn open_channel(target: &WakeTarget) -> Result<UdpSocket, WakeError> {
    let socket = UdpSocket::bind((Ipv4Addr::UNSPECIFIED, 0)).map_err(WakeError::Channel)?;
    socket
        .connect(target.socket_addr())
        .map_err(WakeError::Channel)?;
    socket.set_broadcast(true).map_err(WakeError::Channel)?;
    Ok(socket)
}

/// Splits failures the way the user should read them: known kinds print
/// their single descriptive line, everything else is dumped with the whole
/// cause chain.
fn report_failure(err: &anyhow::Error) {
    match err.downcast_ref::<WakeError>() {
        Some(known) => error!("{known}"),
        None => {
            error!("unexpected error while sending the magic packet: {err}");
            for cause in err.chain().skip(1) {
                error!("  caused by: {cause}");
            }
        }
    }
}
