//! [currencylayer](https://currencylayer.com/) API client.

#![deny(missing_docs)]

use std::fmt::{self, Debug, Display, Formatter};

pub mod cli;
pub mod client;
pub mod config;
pub mod currency;
pub mod error;
pub mod quotes;
pub mod render;
pub mod request;
pub mod response;
pub mod url;

#[cfg(test)]
mod test_util;

pub use client::Client;
pub use currency::{CurrencyCode, CurrencyPair};
pub use error::Error;
pub use quotes::Quotes;

#[derive(Hash, Default, Clone, PartialEq, PartialOrd, Eq, Ord)]
/// [Access key](https://currencylayer.com/documentation#specify_api_key).
///
/// Manage yours [here](https://currencylayer.com/dashboard).
pub struct AccessKey {
	key: String,
}

impl AccessKey {
	/// Creates an [`AccessKey`], rejecting blank keys.
	pub fn new(key: impl Into<String>) -> Option<Self> {
		let key = key.into().trim().to_owned();
		(!key.is_empty()).then_some(Self { key })
	}
}

impl AsRef<str> for AccessKey {
	fn as_ref(&self) -> &str {
		&self.key
	}
}

impl Display for AccessKey {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str(&self.key)
	}
}

/// Redacted, keys end up in logs.
impl Debug for AccessKey {
	fn fmt(&self, f: &mut Formatter) -> fmt::Result {
		f.write_str("AccessKey(***)")
	}
}
