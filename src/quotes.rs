//! Currency quotes container.

use std::{collections::BTreeMap, fmt};

use serde::Deserialize;

use crate::currency::CurrencyPair;

/// Exchange rates keyed by [`CurrencyPair`], in pair order.
#[derive(Default, Clone, PartialEq, Deserialize)]
#[serde(transparent)]
pub struct Quotes(BTreeMap<CurrencyPair, f64>);

impl Quotes {
	/// Gets the count of quotes.
	#[inline] pub fn len(&self) -> usize { self.0.len() }
	/// Gets whether there are no quotes.
	#[inline] pub fn is_empty(&self) -> bool { self.0.is_empty() }

	/// Iterates over the quotes in pair order.
	pub fn iter(&self) -> impl Iterator<Item = (CurrencyPair, f64)> + '_ {
		self.0.iter().map(|(&pair, &rate)| (pair, rate))
	}

	/// Gets the rate for the given pair, if exists.
	pub fn get(&self, pair: CurrencyPair) -> Option<f64> {
		self.0.get(&pair).copied()
	}
}

impl fmt::Debug for Quotes {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		let mut m = f.debug_map();
		for (pair, rate) in self.iter() {
			m.entry(&format_args!("{pair}"), &rate);
		}
		m.finish()
	}
}
