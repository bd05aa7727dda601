/// Process-wide presentation settings, collected once at startup.
pub struct Config {
    /// Emit a diagnostic line for every stage of the wake pipeline.
    pub verbose: bool,
}

/// A single wake request, exactly as received from the caller.
///
/// Absent fields stay `None` until validation resolves them to their
/// documented defaults (limited broadcast, port 9).
#[derive(Debug, Clone)]
pub struct WakeRequest {
    pub mac: String,
    pub ip: Option<String>,
    pub port: Option<u16>,
}
