pub mod wake;

use clap::Parser;

#[derive(Parser)]
#[command(name = "wakr")]
#[command(about = "Wake a sleeping device with a magic packet.")]
pub struct CommandLine {
    /// Hardware address of the device to wake, separators optional
    pub mac: String,

    /// Address the packet is delivered to (limited broadcast by default)
    #[arg(short, long)]
    pub ip: Option<String>,

    /// Delivery port: 7, 9 or a value within 1024-65353 (9 by default)
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Log every stage of the pipeline
    #[arg(short, long)]
    pub verbose: bool,
}

impl CommandLine {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
