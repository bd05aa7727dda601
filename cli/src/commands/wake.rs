use std::net::Ipv4Addr;
use std::process::ExitCode;

use tracing::{error, info};

use wakr_common::config::WakeRequest;
use wakr_common::network::target::DEFAULT_WAKE_PORT;
use wakr_core::waker;

use crate::terminal::print;

/// Echoes the received arguments, runs the pipeline and maps the outcome
/// onto the process exit status.
pub fn run(request: &WakeRequest) -> ExitCode {
    let destination: String = match request.ip.as_deref() {
        Some(ip) => ip.to_string(),
        None => format!("{} (default)", Ipv4Addr::BROADCAST),
    };
    let port: String = match request.port {
        Some(port) => port.to_string(),
        None => format!("{DEFAULT_WAKE_PORT} (default)"),
    };

    print::aligned_line("MAC", &request.mac);
    print::aligned_line("Destination", &destination);
    print::aligned_line("Port", &port);

    if waker::wake(request) {
        info!("magic packet sent");
        ExitCode::SUCCESS
    } else {
        error!("wake request failed");
        ExitCode::FAILURE
    }
}
