//! Response payloads of each endpoint.
//!
//! Every payload carries `success`; when it is `false` the data fields are
//! absent and the body is an [`ApiErrorData`] instead. [`crate::client::decode`]
//! branches on it before decoding any of these.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use serde::Deserialize;

use crate::{currency::CurrencyCode, quotes::Quotes, CurrencyPair};

/// [`live`](crate::url::Endpoint::Live) endpoint response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct LiveData {
	/// Whether the query succeeded.
	pub success: bool,
	/// Link to the Terms & Conditions.
	pub terms: String,
	/// Link to the Privacy Policy.
	pub privacy: String,
	/// When the rates were collected, in UNIX seconds.
	pub timestamp: i64,
	/// The currency all rates are relative to.
	pub source: CurrencyCode,
	/// Rates keyed by currency pair.
	pub quotes: Quotes,
}

/// [`historical`](crate::url::Endpoint::Historical) endpoint response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct HistoricalData {
	/// Whether the query succeeded.
	pub success: bool,
	/// Link to the Terms & Conditions.
	pub terms: String,
	/// Link to the Privacy Policy.
	pub privacy: String,
	/// Set by the API on historical responses.
	#[serde(default)]
	pub historical: bool,
	/// The requested day.
	#[serde(default)]
	pub date: Option<NaiveDate>,
	/// When the rates were collected, in UNIX seconds.
	pub timestamp: i64,
	/// The currency all rates are relative to.
	pub source: CurrencyCode,
	/// Rates keyed by currency pair.
	pub quotes: Quotes,
}

/// [`convert`](crate::url::Endpoint::Convert) endpoint response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConversionResponse {
	/// Whether the query succeeded.
	pub success: bool,
	/// Link to the Terms & Conditions.
	pub terms: String,
	/// Link to the Privacy Policy.
	pub privacy: String,
	/// The echoed query.
	pub query: ConversionQuery,
	/// Rate information.
	pub info: ConversionInfo,
	/// Set when a historical date was requested.
	#[serde(default)]
	pub historical: bool,
	/// The historical date, if one was requested.
	#[serde(default)]
	pub date: Option<NaiveDate>,
	/// The converted amount.
	pub result: f64,
}

/// The query echoed back in a [`ConversionResponse`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConversionQuery {
	/// The currency converted from.
	pub from: CurrencyCode,
	/// The currency converted to.
	pub to: CurrencyCode,
	/// The amount converted.
	pub amount: f64,
}

/// Rate information of a [`ConversionResponse`].
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ConversionInfo {
	/// When the rate was collected, in UNIX seconds.
	#[serde(default)]
	pub timestamp: Option<i64>,
	/// The rate used for the conversion.
	pub quote: f64,
}

/// [`timeframe`](crate::url::Endpoint::Timeframe) endpoint response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimeframeResponse {
	/// Whether the query succeeded.
	pub success: bool,
	/// Link to the Terms & Conditions.
	pub terms: String,
	/// Link to the Privacy Policy.
	pub privacy: String,
	/// Set by the API on timeframe responses.
	#[serde(default)]
	pub timeframe: bool,
	/// First day of the range.
	pub start_date: NaiveDate,
	/// Last day of the range.
	pub end_date: NaiveDate,
	/// The currency all rates are relative to.
	pub source: CurrencyCode,
	/// One set of rates per day.
	pub quotes: BTreeMap<NaiveDate, Quotes>,
}

/// [`change`](crate::url::Endpoint::Change) endpoint response.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ChangeResponse {
	/// Whether the query succeeded.
	pub success: bool,
	/// Link to the Terms & Conditions.
	pub terms: String,
	/// Link to the Privacy Policy.
	pub privacy: String,
	/// Set by the API on change responses.
	#[serde(default)]
	pub change: bool,
	/// First day of the range.
	pub start_date: NaiveDate,
	/// Last day of the range.
	pub end_date: NaiveDate,
	/// The currency all rates are relative to.
	pub source: CurrencyCode,
	/// Change metrics keyed by currency pair.
	pub quotes: BTreeMap<CurrencyPair, ChangeQuote>,
}

/// How one pair moved between the start and end date.
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct ChangeQuote {
	/// Rate on the start date.
	pub start_rate: f64,
	/// Rate on the end date.
	pub end_rate: f64,
	/// Margin between the two.
	pub change: f64,
	/// Margin in percent.
	pub change_pct: f64,
}

/// Body of any response with `success: false`.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiErrorData {
	/// Always `false`.
	pub success: bool,
	/// What went wrong.
	pub error: ApiError,
}

/// Error details reported by the API.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ApiError {
	/// Numeric code, e.g. `101`.
	pub code: i64,
	/// Type tag, e.g. `invalid_access_key`.
	#[serde(rename = "type")]
	pub kind: String,
	/// Human-readable message.
	pub info: String,
}

impl From<ApiError> for crate::Error {
	fn from(ApiError { code, kind, info }: ApiError) -> Self {
		Self::Api { code, kind, info }
	}
}


#[cfg(test)]
mod tests {
	use super::*;

	fn date(s: &str) -> NaiveDate {
		s.parse().unwrap()
	}

	#[test]
	fn live_fixture() {
		let data: LiveData = serde_json::from_str(fixtures::LIVE).unwrap();
		assert!(data.success);
		assert_eq!(data.terms, "https://currencylayer.com/terms");
		assert_eq!(data.privacy, "https://currencylayer.com/privacy");
		assert_eq!(data.timestamp, 1432400348);
		assert_eq!(data.source.to_string(), "USD");
		assert_eq!(data.quotes.len(), 4);
		assert_eq!(data.quotes.get("USDGBP".parse().unwrap()), Some(0.908019));
	}

	#[test]
	fn historical_fixture() {
		let data: HistoricalData = serde_json::from_str(fixtures::HISTORICAL).unwrap();
		assert!(data.success && data.historical);
		assert_eq!(data.date, Some(date("2005-02-01")));
		assert_eq!(data.timestamp, 1107302399);
		assert_eq!(data.quotes.get("USDALL".parse().unwrap()), Some(96.848753));
	}

	#[test]
	fn historical_without_markers_decodes_defaults() {
		let data: HistoricalData = serde_json::from_str(fixtures::LIVE).unwrap();
		assert!(!data.historical);
		assert_eq!(data.date, None);
	}

	#[test]
	fn convert_fixture() {
		let data: ConversionResponse = serde_json::from_str(fixtures::CONVERT).unwrap();
		assert!(data.success);
		assert_eq!(data.query.from.to_string(), "USD");
		assert_eq!(data.query.to.to_string(), "EUR");
		assert_eq!(data.query.amount, 10.0);
		assert_eq!(data.info.timestamp, Some(1430068515));
		assert_eq!(data.info.quote, 0.85);
		assert_eq!(data.result, 8.5);
		assert!(!data.historical);
	}

	#[test]
	fn timeframe_fixture() {
		let data: TimeframeResponse = serde_json::from_str(fixtures::TIMEFRAME).unwrap();
		assert!(data.success && data.timeframe);
		assert_eq!(data.start_date, date("2010-03-01"));
		assert_eq!(data.end_date, date("2010-03-02"));
		assert_eq!(data.quotes.len(), 2);
		assert_eq!(data.quotes[&date("2010-03-02")].get("USDEUR".parse().unwrap()), Some(0.736145));
	}

	#[test]
	fn change_fixture() {
		let data: ChangeResponse = serde_json::from_str(fixtures::CHANGE).unwrap();
		assert!(data.success && data.change);
		let aud = data.quotes[&"USDAUD".parse::<CurrencyPair>().unwrap()];
		assert_eq!(aud, ChangeQuote { start_rate: 1.281236, end_rate: 1.108609, change: -0.1726, change_pct: -13.4735 });
	}

	#[test]
	fn error_fixture() {
		let data: ApiErrorData = serde_json::from_str(fixtures::INVALID_KEY).unwrap();
		assert!(!data.success);
		assert_eq!(data.error.code, 101);
		assert_eq!(data.error.kind, "invalid_access_key");
		assert_eq!(data.error.info, "You have not supplied a valid API Access Key.");
	}
}
