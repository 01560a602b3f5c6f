//! Entry point for **stack-windows**.
//!
//! Connects to the host, arranges the first eight terminal windows into
//! three columns, and exits.  Takes no arguments.

use log::{error, info};
use termstack::arranger::arrange;
use termstack::config::Config;
use termstack::host::socket::SocketHost;
use termstack::probe::{ClampProbe, FixedBounds};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = Config::load_or_default();
    let path = config.connection.socket_path();
    let host = match SocketHost::connect(&path, config.connection.policy(false)) {
        Ok(host) => host,
        Err(e) => {
            error!("failed to connect to {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    let options = config.arrange.options();
    let result = match config.arrange.screen {
        Some(bounds) => arrange(&host, &FixedBounds(bounds), &options),
        None => arrange(&host, &ClampProbe::new(config.arrange.probe_offset), &options),
    };

    match result {
        Ok(report) => info!("arranged {} window(s)", report.placed.len()),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}
