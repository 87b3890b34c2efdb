//! URL building

use std::fmt::Display;

use reqwest::Url;

use crate::{AccessKey, Error};

/// The API root every [`Endpoint`] path is joined onto.
pub const BASE_URL: &str = "http://api.currencylayer.com/";

macro_rules! defendpoints {
	($($id:ident <- $path:literal),* $(,)?) => {
		/// An API endpoint: a fixed path under the base URL.
		#[derive(Debug, Hash, Clone, Copy, PartialEq, Eq)]
		pub enum Endpoint {
			$(
				#[doc = concat!("The `", $path, "` endpoint.")]
				$id,
			)*
		}

		impl Endpoint {
			/// The path joined onto the base URL.
			pub const fn path(self) -> &'static str {
				match self {
					$(Endpoint::$id => $path,)*
				}
			}
		}
	};
}

defendpoints!(
	Live <- "live",
	Historical <- "historical",
	Convert <- "convert",
	Timeframe <- "timeframe",
	Change <- "change",
);

/// Query parameters of one request, not including the access key.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct Query {
	pairs: Vec<(&'static str, String)>,
}

impl Query {
	/// Creates an empty [`Query`].
	pub const fn new() -> Self {
		Self { pairs: Vec::new() }
	}

	/// Appends a part, if it has anything to write.
	pub fn with(mut self, part: impl QueryPart) -> Self {
		part.write_query_part(&mut self);
		self
	}

	/// The pairs sorted by key.
	pub fn into_sorted(mut self) -> Vec<(&'static str, String)> {
		self.pairs.sort_by(|a, b| a.0.cmp(b.0));
		self.pairs
	}
}

/// Something that contributes to a [`Query`].
pub trait QueryPart: Sized {
	/// Writes the part into the query.
	///
	/// Returns whether anything was written.
	#[inline] fn write_query_part(self, _query: &mut Query) -> bool { false }
}

impl<Inner: QueryPart> QueryPart for Option<Inner> {
	#[inline] fn write_query_part(self, query: &mut Query) -> bool {
		if let Some(inner) = self {
			inner.write_query_part(query)
		} else { false }
	}
}

/// A named query parameter.
pub struct Param<T>(pub &'static str, pub T);

impl<T: Display> QueryPart for Param<T> {
	fn write_query_part(self, query: &mut Query) -> bool {
		query.pairs.push((self.0, self.1.to_string()));
		true
	}
}

/// Parses a base URL, making sure endpoint paths join under it rather than replace its last segment.
pub fn parse_base(base: &str) -> Result<Url, Error> {
	let mut url = Url::parse(base).map_err(|error| Error::InvalidUrl(error.to_string()))?;
	if url.cannot_be_a_base() {
		return Err(Error::InvalidUrl(format!("{base} cannot be a base URL")));
	}
	if !url.path().ends_with('/') {
		let path = format!("{}/", url.path());
		url.set_path(&path);
	}
	Ok(url)
}

/// Builds `{base}{endpoint}?access_key={key}&{query…}`.
pub fn build(base: &Url, endpoint: Endpoint, access_key: &AccessKey, query: Query) -> Result<Url, Error> {
	let mut url = base.join(endpoint.path()).map_err(|error| Error::InvalidUrl(error.to_string()))?;
	{
		let mut pairs = url.query_pairs_mut();
		pairs.clear();
		pairs.append_pair("access_key", access_key.as_ref());
		for (key, value) in query.into_sorted() {
			pairs.append_pair(key, &value);
		}
	}
	Ok(url)
}
