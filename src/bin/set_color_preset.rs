//! Entry point for **set-color-preset**.
//!
//! Usage: `set-color-preset <NAME>`
//!
//! Waits for the host to come up (unless the config says otherwise), then
//! applies the named color preset to every saved profile.

use log::{error, info};
use termstack::config::Config;
use termstack::host::socket::SocketHost;
use termstack::theme::apply_color_preset;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let name = match parse_args(std::env::args().skip(1)) {
        Some(name) => name,
        None => {
            error!("usage: set-color-preset <NAME>");
            std::process::exit(1);
        }
    };

    let config = Config::load_or_default();
    let path = config.connection.socket_path();
    let host = match SocketHost::connect(&path, config.connection.policy(true)) {
        Ok(host) => host,
        Err(e) => {
            error!("failed to connect to {}: {}", path.display(), e);
            std::process::exit(1);
        }
    };

    match apply_color_preset(&host, &name) {
        Ok(n) => info!("applied {} to {} profile(s)", name, n),
        Err(e) => {
            error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Exactly one positional argument: the preset name.
fn parse_args(mut args: impl Iterator<Item = String>) -> Option<String> {
    match (args.next(), args.next()) {
        (Some(name), None) => Some(name),
        _ => None,
    }
}
