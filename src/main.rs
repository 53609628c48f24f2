mod config;
mod domain;
mod input;
mod lockout;
mod registry;
mod session;

use tokio::io::BufReader;
use tracing_subscriber::EnvFilter;

use crate::config::SessionConfig;
use crate::domain::Error;
use crate::input::TokenReader;
use crate::registry::InMemoryRegistry;
use crate::session::Session;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // stdout carries the ATM dialogue, diagnostics go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = SessionConfig::default();
    let accounts = InMemoryRegistry::seeded(&config.seed_accounts)?;
    let input = TokenReader::new(BufReader::new(tokio::io::stdin()));

    let mut session = Session::new(input, std::io::stdout(), accounts, config);

    let outcome = tokio::select! {
        res = session.run() => res,
        signal = tokio::signal::ctrl_c() => match signal {
            Ok(()) => Err(Error::Interrupted),
            Err(e) => Err(Error::from(e)),
        },
    };

    match outcome {
        Ok(()) => Ok(()),
        Err(Error::Interrupted) => {
            tracing::warn!("session interrupted");
            println!("Something went wrong. Program terminating.\n");
            // a blocked stdin read would otherwise hold up runtime shutdown
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}
