//! Typed requests, one per endpoint.
//!
//! Each request is validated when it is built and knows its [`Endpoint`] and
//! response shape, so [`Client::send`](crate::Client::send) is the only
//! generic piece.

use std::{
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use chrono::NaiveDate;
use serde::de::DeserializeOwned;

use crate::{
	currency::CurrencyCode,
	response::{ChangeResponse, ConversionResponse, HistoricalData, LiveData, TimeframeResponse},
	url::{Endpoint, Param, Query},
};

/// A request to one endpoint.
pub trait Request {
	/// The endpoint the request goes to.
	const ENDPOINT: Endpoint;
	/// The payload the endpoint answers with.
	type Response: DeserializeOwned;

	/// The request's query parameters, excluding the access key.
	fn query(&self) -> Query;
}

/// A request parameter failed validation.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ParameterError {
	/// A currency list entry is not a currency code.
	#[error("invalid currency code {0:?} in currency list")]
	Currency(String),
	/// The currency list is empty.
	#[error("the currency list is empty")]
	EmptyCurrencies,
	/// The amount is negative, infinite or not a number.
	#[error("invalid amount {0:?}: expected a non-negative number")]
	Amount(String),
	/// The range ends before it starts.
	#[error("the start date {start} is after the end date {end}")]
	ReversedRange {
		/// First day.
		start: NaiveDate,
		/// Last day.
		end: NaiveDate,
	},
}

/// A non-empty, comma-separated list of currency codes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CurrencyList(Vec<CurrencyCode>);

impl TryFrom<Vec<CurrencyCode>> for CurrencyList {
	type Error = ParameterError;

	fn try_from(codes: Vec<CurrencyCode>) -> Result<Self, Self::Error> {
		if codes.is_empty() { Err(ParameterError::EmptyCurrencies) } else { Ok(Self(codes)) }
	}
}

impl FromStr for CurrencyList {
	type Err = ParameterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.split(',')
			.map(|code| code.parse().map_err(|_| ParameterError::Currency(code.trim().to_owned())))
			.collect::<Result<Vec<_>, _>>()?
			.try_into()
	}
}

impl Display for CurrencyList {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let mut codes = self.0.iter();
		if let Some(head) = codes.next() {
			head.fmt(f)?;
			for code in codes {
				write!(f, ",{code}")?;
			}
		}
		Ok(())
	}
}

/// A finite, non-negative amount of money.
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct Amount(f64);

impl Amount {
	/// Creates an [`Amount`].
	pub fn new(value: f64) -> Result<Self, ParameterError> {
		if value.is_finite() && value >= 0.0 {
			Ok(Self(value))
		} else {
			Err(ParameterError::Amount(value.to_string()))
		}
	}
}

impl FromStr for Amount {
	type Err = ParameterError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let value = s.trim().parse::<f64>().map_err(|_| ParameterError::Amount(s.to_owned()))?;
		Self::new(value).map_err(|_| ParameterError::Amount(s.to_owned()))
	}
}

/// Shortest decimal form: `10`, `2.5`.
impl Display for Amount {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}

/// An inclusive range of days, never reversed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DateRange {
	start: NaiveDate,
	end: NaiveDate,
}

impl DateRange {
	/// Creates a [`DateRange`].
	pub fn new(start: NaiveDate, end: NaiveDate) -> Result<Self, ParameterError> {
		if start > end {
			Err(ParameterError::ReversedRange { start, end })
		} else {
			Ok(Self { start, end })
		}
	}
}

/// Most recent rates.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Live {
	/// Source currency, `USD` when unset.
	pub source: Option<CurrencyCode>,
	/// Limit the response to these currencies.
	pub currencies: Option<CurrencyList>,
}

impl Request for Live {
	const ENDPOINT: Endpoint = Endpoint::Live;
	type Response = LiveData;

	fn query(&self) -> Query {
		Query::new()
			.with(self.source.map(|source| Param("source", source)))
			.with(self.currencies.as_ref().map(|currencies| Param("currencies", currencies)))
	}
}

/// Rates of one past day.
#[derive(Debug, Clone, PartialEq)]
pub struct Historical {
	/// The day.
	pub date: NaiveDate,
	/// Source currency, `USD` when unset.
	pub source: Option<CurrencyCode>,
	/// Limit the response to these currencies.
	pub currencies: Option<CurrencyList>,
}

impl Request for Historical {
	const ENDPOINT: Endpoint = Endpoint::Historical;
	type Response = HistoricalData;

	fn query(&self) -> Query {
		Query::new()
			.with(Param("date", self.date))
			.with(self.source.map(|source| Param("source", source)))
			.with(self.currencies.as_ref().map(|currencies| Param("currencies", currencies)))
	}
}

/// Conversion of an amount, at today's or a past day's rate.
#[derive(Debug, Clone, PartialEq)]
pub struct Convert {
	/// Currency to convert from.
	pub from: CurrencyCode,
	/// Currency to convert to.
	pub to: CurrencyCode,
	/// Amount to convert.
	pub amount: Amount,
	/// Use this day's rate instead of the latest.
	pub date: Option<NaiveDate>,
}

impl Request for Convert {
	const ENDPOINT: Endpoint = Endpoint::Convert;
	type Response = ConversionResponse;

	fn query(&self) -> Query {
		Query::new()
			.with(Param("from", self.from))
			.with(Param("to", self.to))
			.with(Param("amount", self.amount))
			.with(self.date.map(|date| Param("date", date)))
	}
}

/// Daily rates over a range.
#[derive(Debug, Clone, PartialEq)]
pub struct Timeframe {
	/// The days.
	pub range: DateRange,
	/// Source currency, `USD` when unset.
	pub source: Option<CurrencyCode>,
	/// Limit the response to these currencies.
	pub currencies: Option<CurrencyList>,
}

impl Request for Timeframe {
	const ENDPOINT: Endpoint = Endpoint::Timeframe;
	type Response = TimeframeResponse;

	fn query(&self) -> Query {
		range_query(&self.range, self.source, self.currencies.as_ref())
	}
}

/// Change metrics between two days.
#[derive(Debug, Clone, PartialEq)]
pub struct Change {
	/// The days.
	pub range: DateRange,
	/// Source currency, `USD` when unset.
	pub source: Option<CurrencyCode>,
	/// Limit the response to these currencies.
	pub currencies: Option<CurrencyList>,
}

impl Request for Change {
	const ENDPOINT: Endpoint = Endpoint::Change;
	type Response = ChangeResponse;

	fn query(&self) -> Query {
		range_query(&self.range, self.source, self.currencies.as_ref())
	}
}

fn range_query(range: &DateRange, source: Option<CurrencyCode>, currencies: Option<&CurrencyList>) -> Query {
	Query::new()
		.with(Param("start_date", range.start))
		.with(Param("end_date", range.end))
		.with(source.map(|source| Param("source", source)))
		.with(currencies.map(|currencies| Param("currencies", currencies)))
}

#[cfg(test)]
mod tests {
	use super::*;

	fn date(s: &str) -> NaiveDate {
		s.parse().unwrap()
	}

	fn pairs(query: Query) -> Vec<(&'static str, String)> {
		query.into_sorted()
	}

	#[test]
	fn live_without_options_is_empty() {
		assert!(pairs(Live::default().query()).is_empty());
	}

	#[test]
	fn live_with_options() {
		let live = Live {
			source: Some("eur".parse().unwrap()),
			currencies: Some("usd, gbp".parse().unwrap()),
		};
		assert_eq!(pairs(live.query()), [
			("currencies", "USD,GBP".to_owned()),
			("source", "EUR".to_owned()),
		]);
	}

	#[test]
	fn historical_sends_date() {
		let historical = Historical { date: date("2005-02-01"), source: None, currencies: None };
		assert_eq!(pairs(historical.query()), [("date", "2005-02-01".to_owned())]);
	}

	#[test]
	fn convert_sends_shortest_amount() {
		let convert = Convert {
			from: "USD".parse().unwrap(),
			to: "EUR".parse().unwrap(),
			amount: "10".parse().unwrap(),
			date: None,
		};
		assert_eq!(pairs(convert.query()), [
			("amount", "10".to_owned()),
			("from", "USD".to_owned()),
			("to", "EUR".to_owned()),
		]);
		let convert = Convert { amount: "2.50".parse().unwrap(), date: Some(date("2020-01-31")), ..convert };
		assert_eq!(pairs(convert.query())[0], ("amount", "2.5".to_owned()));
		assert_eq!(pairs(convert.query())[1], ("date", "2020-01-31".to_owned()));
	}

	#[test]
	fn range_requests_send_both_dates() {
		let range = DateRange::new(date("2010-03-01"), date("2010-04-01")).unwrap();
		let expected = [("end_date", "2010-04-01".to_owned()), ("start_date", "2010-03-01".to_owned())];
		assert_eq!(pairs(Timeframe { range, source: None, currencies: None }.query()), expected);
		assert_eq!(pairs(Change { range, source: None, currencies: None }.query()), expected);
	}

	#[test]
	fn reversed_range_is_rejected() {
		let error = DateRange::new(date("2010-04-01"), date("2010-03-01")).unwrap_err();
		assert!(matches!(error, ParameterError::ReversedRange { .. }));
		assert!(DateRange::new(date("2010-03-01"), date("2010-03-01")).is_ok());
	}

	#[test]
	fn currency_list_validation() {
		assert_eq!("eur".parse::<CurrencyList>().unwrap().to_string(), "EUR");
		assert_eq!("EUR,,USD".parse::<CurrencyList>(), Err(ParameterError::Currency(String::new())));
		assert_eq!("EUR,DOLLAR".parse::<CurrencyList>(), Err(ParameterError::Currency("DOLLAR".to_owned())));
		assert_eq!(CurrencyList::try_from(Vec::new()), Err(ParameterError::EmptyCurrencies));
	}

	#[test]
	fn amount_validation() {
		assert_eq!("0".parse::<Amount>().unwrap().to_string(), "0");
		assert!("-1".parse::<Amount>().is_err());
		assert!("NaN".parse::<Amount>().is_err());
		assert!("inf".parse::<Amount>().is_err());
		assert!("ten".parse::<Amount>().is_err());
	}
}
