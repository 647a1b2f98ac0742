//! Zaika forms - Entry Point
//!
//! Hosts the login or signup form on the terminal: each stdin line is a page
//! event, each stdout line is what the page would show.

use log::{error, info};
use tokio::io::{self, BufReader};

use zaika_forms::console;
use zaika_forms::error::handlers::handle_error;
use zaika_forms::{FormConfig, FormSession};

#[tokio::main]
async fn main() {
    // Initialize the logger (env_logger picks up RUST_LOG environment variable)
    env_logger::init();

    let config = match FormConfig::load() {
        Ok(config) => config,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    let mut session = match FormSession::new(config) {
        Ok(session) => session,
        Err(e) => {
            handle_error(&e);
            std::process::exit(1);
        }
    };

    info!("Launching {} form console...", session.kind());

    if let Err(e) = console::run(&mut session, BufReader::new(io::stdin()), io::stdout()).await {
        error!("Console stopped: {}", e);
        std::process::exit(1);
    }
}
