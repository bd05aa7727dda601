mod commands;
mod terminal;

use std::process::ExitCode;

use commands::{CommandLine, wake};
use terminal::{logging, print};
use wakr_common::config::{Config, WakeRequest};

fn main() -> ExitCode {
    let commands = CommandLine::parse_args();

    let cfg = Config {
        verbose: commands.verbose,
    };
    logging::init(&cfg);

    print::header("wake on lan");

    let request = WakeRequest {
        mac: commands.mac,
        ip: commands.ip,
        port: commands.port,
    };
    wake::run(&request)
}
