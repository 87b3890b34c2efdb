//! Command-line surface and dispatch.

use std::{io, process::ExitCode};

use chrono::NaiveDate;
use clap::{error::ErrorKind, ArgAction, Args, CommandFactory, Parser, Subcommand};
use tracing::info;

use crate::{
	config::{ConfigError, ConfigStore},
	render,
	request::{Amount, Change, Convert, CurrencyList, DateRange, Historical, Live, Request, Timeframe},
	url::BASE_URL,
	AccessKey, Client, CurrencyCode,
};

/// A command-line tool for fetching and converting live currency data.
#[derive(Parser, Debug)]
#[command(name = "currency-layer", version)]
pub struct Cli {
	/// API root to send requests to.
	#[arg(long, global = true, env = "CURRENCYLAYER_BASE_URL", default_value = BASE_URL)]
	pub base_url: String,
	/// Log more; repeat for more detail.
	#[arg(short, long, global = true, action = ArgAction::Count)]
	pub verbose: u8,
	#[command(subcommand)]
	#[allow(missing_docs)]
	pub command: CliCommand,
}

/// The subcommands.
#[derive(Subcommand, Debug)]
pub enum CliCommand {
	/// Request the most recent exchange rate data.
	Live {
		#[command(flatten)]
		#[allow(missing_docs)]
		filter: Filter,
	},
	/// Request historical rates for a specific day.
	Historical {
		/// The day to request rates for (YYYY-MM-DD).
		date: NaiveDate,
		#[command(flatten)]
		#[allow(missing_docs)]
		filter: Filter,
	},
	/// Convert any amount from one currency to another.
	Convert {
		/// The currency to convert from.
		from: CurrencyCode,
		/// The currency to convert to.
		to: CurrencyCode,
		/// The amount to convert.
		amount: Amount,
		/// Use the rate of this day instead of the latest (YYYY-MM-DD).
		#[arg(short, long)]
		date: Option<NaiveDate>,
	},
	/// Request exchange rates for a specific period of time.
	Timeframe {
		/// The start date of the time frame (YYYY-MM-DD).
		start_date: NaiveDate,
		/// The end date of the time frame (YYYY-MM-DD).
		end_date: NaiveDate,
		#[command(flatten)]
		#[allow(missing_docs)]
		filter: Filter,
	},
	/// Request any currency's change parameters between two dates.
	Change {
		/// The start date of the time frame (YYYY-MM-DD).
		start_date: NaiveDate,
		/// The end date of the time frame (YYYY-MM-DD).
		end_date: NaiveDate,
		#[command(flatten)]
		#[allow(missing_docs)]
		filter: Filter,
	},
	/// Set your currencylayer API key.
	Key {
		/// Your API key from currencylayer.
		api_key: String,
	},
}

/// Options shared by the rate-listing commands.
#[derive(Args, Debug, Default, Clone)]
pub struct Filter {
	/// Source currency other than the default USD.
	#[arg(short, long)]
	pub source: Option<CurrencyCode>,
	/// Comma-separated currency codes to limit the response to.
	#[arg(short, long)]
	pub currencies: Option<CurrencyList>,
}

/// Why a run ended without reaching the API.
#[derive(Debug, thiserror::Error)]
pub enum RunError {
	/// Arguments parsed but did not validate together.
	#[error(transparent)]
	Usage(#[from] clap::Error),
	/// No API key could be obtained.
	#[error("Failed to set API key.")]
	NoApiKey,
	/// The settings file could not be read or written.
	#[error(transparent)]
	Config(#[from] ConfigError),
	/// Writing output failed.
	#[error("failed to write output: {0}")]
	Output(#[from] io::Error),
}

/// What a run needs from its surroundings.
pub struct Context<'a, Out, Prompt> {
	/// Value of [`crate::config::API_KEY_ENV`], if set.
	pub env_api_key: Option<String>,
	/// Where the API key persists.
	pub store: &'a ConfigStore,
	/// HTTP client for the request.
	pub http: reqwest::Client,
	/// Standard output.
	pub out: Out,
	/// Asks the user for an API key.
	pub prompt: Prompt,
}

/// Runs one command.
///
/// Requests that fail still exit successfully once their error is printed.
pub async fn run<Out, Prompt>(cli: Cli, ctx: Context<'_, Out, Prompt>) -> Result<ExitCode, RunError>
where
	Out: io::Write,
	Prompt: FnOnce() -> Option<String>,
{
	let Context { env_api_key, store, http, mut out, prompt } = ctx;

	let job = match cli.command {
		CliCommand::Key { api_key } => {
			let key = AccessKey::new(api_key).ok_or(RunError::NoApiKey)?;
			store.set_api_key(key.as_ref())?;
			writeln!(out, "API key has been set successfully.")?;
			return Ok(ExitCode::SUCCESS);
		}
		CliCommand::Live { filter } => Job::Live(Live { source: filter.source, currencies: filter.currencies }),
		CliCommand::Historical { date, filter } => {
			Job::Historical(Historical { date, source: filter.source, currencies: filter.currencies })
		}
		CliCommand::Convert { from, to, amount, date } => Job::Convert(Convert { from, to, amount, date }),
		CliCommand::Timeframe { start_date, end_date, filter } => Job::Timeframe(Timeframe {
			range: date_range(start_date, end_date)?,
			source: filter.source,
			currencies: filter.currencies,
		}),
		CliCommand::Change { start_date, end_date, filter } => Job::Change(Change {
			range: date_range(start_date, end_date)?,
			source: filter.source,
			currencies: filter.currencies,
		}),
	};

	let access_key = resolve_api_key(env_api_key, store, prompt, &mut out)?;
	let client = Client::with_base_url(Some(access_key), cli.base_url).http_client(http);

	match job {
		Job::Live(request) => fetch(&client, &request, render::live, &mut out).await?,
		Job::Historical(request) => fetch(&client, &request, render::historical, &mut out).await?,
		Job::Convert(request) => fetch(&client, &request, render::convert, &mut out).await?,
		Job::Timeframe(request) => fetch(&client, &request, render::timeframe, &mut out).await?,
		Job::Change(request) => fetch(&client, &request, render::change, &mut out).await?,
	}

	Ok(ExitCode::SUCCESS)
}

/// A validated request, built before the key is resolved so bad input never prompts.
enum Job {
	Live(Live),
	Historical(Historical),
	Convert(Convert),
	Timeframe(Timeframe),
	Change(Change),
}

fn date_range(start: NaiveDate, end: NaiveDate) -> Result<DateRange, clap::Error> {
	DateRange::new(start, end).map_err(|error| Cli::command().error(ErrorKind::ValueValidation, error))
}

async fn fetch<R: Request>(
	client: &Client,
	request: &R,
	lines: fn(&R::Response) -> Vec<String>,
	mut out: impl io::Write,
) -> io::Result<()> {
	match client.send(request).await {
		Ok(response) => {
			for line in lines(&response) {
				writeln!(out, "{line}")?;
			}
		}
		Err(error) => writeln!(out, "{}", render::error(&error))?,
	}
	Ok(())
}

/// Environment first, then the settings file, then the prompt.
///
/// A prompted key is persisted before it is used.
pub fn resolve_api_key(
	env_api_key: Option<String>,
	store: &ConfigStore,
	prompt: impl FnOnce() -> Option<String>,
	mut out: impl io::Write,
) -> Result<AccessKey, RunError> {
	if let Some(key) = env_api_key.and_then(AccessKey::new) {
		info!("using API key from the environment");
		return Ok(key);
	}
	if let Some(key) = store.api_key()?.and_then(AccessKey::new) {
		return Ok(key);
	}

	writeln!(out, "No API key found. Please set one now:")?;
	out.flush()?;
	let key = prompt().and_then(AccessKey::new).ok_or(RunError::NoApiKey)?;
	store.set_api_key(key.as_ref())?;
	writeln!(out, "API key has been set successfully.")?;
	Ok(key)
}
