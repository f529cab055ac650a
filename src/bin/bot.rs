//! Bearbot console binary.
//!
//! Drives the command dispatcher from a line-oriented console loop. The
//! production chat surface (the Slack connection and its event dispatch)
//! is an external collaborator; this binary stands in for it so the bot
//! can be exercised locally.
//!
//! # Environment Variables
//!
//! - `URL` — base URL of the Honeypot recruiting API (required)
//! - `RUST_LOG` — log filter (default: "info")
//!
//! # Usage
//!
//! ```bash
//! URL=https://honeypot.example cargo run --bin bot
//! ```

use std::io::{self, BufRead, Write};

use bearbot::config::BotConfig;
use bearbot::dispatcher::Dispatcher;
use bearbot::session::SessionStore;

#[tokio::main]
async fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let config = match BotConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    log::info!("Bearbot v{} talking to {}", bearbot::VERSION, config.api_base_url);
    log::info!("Commands:");
    log::info!("  login <email> <password> — sign in as recruiter");
    log::info!("  search <keywords>        — search talents");

    let dispatcher = Dispatcher::new(config, SessionStore::new());

    // One console user; a chat SDK would supply real per-user ids.
    let chat_user_id = "console";

    let stdin = io::stdin();
    let mut stdout = io::stdout();

    loop {
        print!("> ");
        if stdout.flush().is_err() {
            break;
        }

        let mut line = String::new();
        match stdin.lock().read_line(&mut line) {
            Ok(0) | Err(_) => break, // EOF or closed terminal
            Ok(_) => {}
        }

        let text = line.trim_end_matches(['\r', '\n']);
        if text.is_empty() {
            continue;
        }

        if let Some(reply) = dispatcher.handle_message(chat_user_id, text).await {
            if writeln!(stdout, "{}", reply).is_err() {
                break;
            }
        }
    }
}
