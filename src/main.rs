#![warn(clippy::pedantic, clippy::all, clippy::nursery)]
#![allow(clippy::single_match_else)]

use crate::{
    actions::run, config::RuntimeConfiguration, console_conveniences::Console,
    state::RegistrationState,
};
use std::{io, process::ExitCode};
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[macro_use]
extern crate tracing;

mod actions;
mod config;
mod console_conveniences;
mod data;
mod error;
mod state;
mod storage;

fn main() -> ExitCode {
    tracing::subscriber::set_global_default(
        FmtSubscriber::builder()
            .with_env_filter(EnvFilter::from_default_env())
            .with_writer(io::stderr)
            .finish(),
    )
    .expect("unable to set tracing subscriber");

    if let Err(e) = dotenvy::dotenv() {
        debug!(?e, "No .env file loaded");
    }

    let config = RuntimeConfiguration::new();
    info!(file = ?config.enrolment_file(), "`tracing` online");

    let mut state = RegistrationState::new(config);
    let mut console = Console::new(io::stdin().lock(), io::stdout().lock());

    let outcome = state
        .reload(&mut console)
        .and_then(|()| run(&mut state, &mut console));

    match outcome {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!(?e, "Console failed");
            ExitCode::FAILURE
        }
    }
}
