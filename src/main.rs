use std::{io, process::ExitCode};

use clap::Parser;
use currencylayer::{
	cli::{self, Cli, Context, RunError},
	config::{ConfigStore, API_KEY_ENV},
};
use tracing::error;
use tracing_subscriber::EnvFilter;

fn init_tracing(verbose: u8) {
	let level = match verbose {
		0 => "warn",
		1 => "info",
		2 => "debug",
		_ => "trace",
	};
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(format!("currencylayer={level}")));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.with_target(true)
		.init();
}

fn read_api_key() -> Option<String> {
	let mut line = String::new();
	match io::stdin().read_line(&mut line) {
		Ok(0) | Err(_) => None,
		Ok(_) => Some(line),
	}
}

#[tokio::main]
async fn main() -> ExitCode {
	let cli = Cli::parse();
	init_tracing(cli.verbose);

	let store = match ConfigStore::open() {
		Ok(store) => store,
		Err(e) => {
			error!("{e}");
			println!("Failed to set API key.");
			return ExitCode::FAILURE;
		}
	};

	let ctx = Context {
		env_api_key: std::env::var(API_KEY_ENV).ok(),
		store: &store,
		http: reqwest::Client::new(),
		out: io::stdout().lock(),
		prompt: read_api_key,
	};

	match cli::run(cli, ctx).await {
		Ok(code) => code,
		Err(RunError::Usage(e)) => e.exit(),
		Err(RunError::NoApiKey) => {
			println!("{}", RunError::NoApiKey);
			ExitCode::FAILURE
		}
		Err(e) => {
			error!("{e}");
			eprintln!("{e}");
			ExitCode::FAILURE
		}
	}
}
