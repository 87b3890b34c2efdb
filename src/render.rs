//! Terminal output for each response.

use crate::{
	currency::CurrencyCode,
	quotes::Quotes,
	response::{ChangeResponse, ConversionResponse, HistoricalData, LiveData, TimeframeResponse},
	CurrencyPair, Error,
};

/// `SOURCE->DEST`, with the source prefix stripped from the pair code.
fn arrow(source: CurrencyCode, pair: CurrencyPair) -> String {
	if pair.source == source {
		format!("{source}->{}", pair.quote)
	} else {
		format!("{source}->{pair}")
	}
}

fn quote_lines<'a>(source: CurrencyCode, quotes: &'a Quotes, prefix: &'a str) -> impl Iterator<Item = String> + 'a {
	quotes.iter().map(move |(pair, rate)| format!("{prefix}{} = {rate}", arrow(source, pair)))
}

/// One `* USD->EUR = 0.85` line per quote.
pub fn live(data: &LiveData) -> Vec<String> {
	quote_lines(data.source, &data.quotes, "* ").collect()
}

/// [`live`] lines under a `Rates for {date}` header.
pub fn historical(data: &HistoricalData) -> Vec<String> {
	let header = match data.date {
		Some(date) => format!("Rates for {date}"),
		None => "Historical rates".to_owned(),
	};
	std::iter::once(header)
		.chain(quote_lines(data.source, &data.quotes, "* "))
		.collect()
}

/// The result line and the rate used.
pub fn convert(data: &ConversionResponse) -> Vec<String> {
	let mut lines = vec![format!("{} -> {} = {}", data.query.from, data.query.to, data.result)];
	match data.date {
		Some(date) => lines.push(format!("rate: {} (as of {date})", data.info.quote)),
		None => lines.push(format!("rate: {}", data.info.quote)),
	}
	lines
}

/// A header per day with its quotes indented below.
pub fn timeframe(data: &TimeframeResponse) -> Vec<String> {
	let mut lines = Vec::new();
	for (date, quotes) in &data.quotes {
		lines.push(date.to_string());
		lines.extend(quote_lines(data.source, quotes, "  "));
	}
	lines
}

/// One line per pair with start, end and margin.
pub fn change(data: &ChangeResponse) -> Vec<String> {
	data.quotes
		.iter()
		.map(|(&pair, quote)| {
			format!(
				"{}: {} -> {} (change {}, {}%)",
				arrow(data.source, pair),
				quote.start_rate,
				quote.end_rate,
				quote.change,
				quote.change_pct,
			)
		})
		.collect()
}

/// `Error: {message}`.
pub fn error(error: &Error) -> String {
	format!("Error: {error}")
}
