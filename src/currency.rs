//! [Currency codes](CurrencyCode) and [pairs](CurrencyPair).

use std::{
	error::Error,
	fmt::{self, Display, Formatter},
	str::FromStr,
};

use serde::{de, Deserialize, Deserializer};

/// [Currency code](https://en.wikipedia.org/wiki/ISO_4217).
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct CurrencyCode {
	/// The code in uppercase alpha ASCII bytes.
	code: [u8; 3],
}

/// The default currency code is `USD`.
///
/// It is the API's default source currency.
impl Default for CurrencyCode {
	fn default() -> Self {
		Self { code: *b"USD" }
	}
}

impl TryFrom<[u8; 3]> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	/// Accepts ASCII letters of either case, stores them uppercase.
	fn try_from(value: [u8; 3]) -> Result<Self, Self::Error> {
		if value.iter().all(u8::is_ascii_alphabetic) {
			Ok(Self { code: value.map(|byte| byte.to_ascii_uppercase()) })
		} else {
			Err(InvalidCurrencyCodeError)
		}
	}
}

impl<'a> TryFrom<&'a [u8]> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: &'a [u8]) -> Result<Self, Self::Error> {
		let values: [u8; 3] = value.try_into().map_err(|_| InvalidCurrencyCodeError)?;
		Self::try_from(values)
	}
}

impl<'a> TryFrom<&'a str> for CurrencyCode {
	type Error = InvalidCurrencyCodeError;

	fn try_from(value: &'a str) -> Result<Self, Self::Error> {
		Self::try_from(value.trim().as_bytes())
	}
}

impl FromStr for CurrencyCode {
	type Err = InvalidCurrencyCodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		s.try_into()
	}
}

impl AsRef<[u8]> for CurrencyCode {
	fn as_ref(&self) -> &[u8] {
		&self.code
	}
}

impl AsRef<str> for CurrencyCode {
	fn as_ref(&self) -> &str {
		// The code is always uppercase ASCII.
		std::str::from_utf8(&self.code).unwrap_or_default()
	}
}

impl Display for CurrencyCode {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		let code: &str = self.as_ref();
		code.fmt(f)
	}
}

impl<'de> Deserialize<'de> for CurrencyCode {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let code = String::deserialize(deserializer)?;
		code.parse().map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&code), &"a three-letter currency code"))
	}
}

/// Invalid currency code error.
///
/// Valid currency codes are three alpha ASCII characters.
#[derive(Debug, Hash, Default, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct InvalidCurrencyCodeError;

impl Display for InvalidCurrencyCodeError {
	fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
		"invalid currency code".fmt(f)
	}
}

impl Error for InvalidCurrencyCodeError {}

/// A concatenated currency pair code, e.g. `USDEUR`.
///
/// Every quote map in the API's responses is keyed by these.
#[derive(Debug, Hash, Clone, Copy, PartialEq, PartialOrd, Eq, Ord)]
pub struct CurrencyPair {
	/// The currency the rate is relative to.
	pub source: CurrencyCode,
	/// The currency being quoted.
	pub quote: CurrencyCode,
}

impl FromStr for CurrencyPair {
	type Err = InvalidCurrencyCodeError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let bytes = s.as_bytes();
		if bytes.len() != 6 {
			return Err(InvalidCurrencyCodeError);
		}
		Ok(Self {
			source: bytes[..3].try_into()?,
			quote: bytes[3..].try_into()?,
		})
	}
}

impl Display for CurrencyPair {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		write!(f, "{}{}", self.source, self.quote)
	}
}

impl<'de> Deserialize<'de> for CurrencyPair {
	fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
		let pair = String::deserialize(deserializer)?;
		pair.parse().map_err(|_| de::Error::invalid_value(de::Unexpected::Str(&pair), &"a six-letter currency pair code"))
	}
}
