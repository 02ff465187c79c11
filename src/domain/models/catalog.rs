//! Country Catalog Descriptors
//!
//! Raw country data as reported by the catalog feed. Every field is
//! optional at this stage; the refresh pipeline validates and coerces
//! before anything reaches the store.

/// One raw country entry from the catalog feed
#[derive(Debug, Clone, Default)]
pub struct CountryDescriptor {
    pub name: Option<String>,
    pub capital: Option<String>,
    pub region: Option<String>,
    pub population: Option<i64>,
    pub flag: Option<String>,
    pub currencies: Vec<CurrencyDescriptor>,
}

/// Currency entry inside a country descriptor
#[derive(Debug, Clone, Default)]
pub struct CurrencyDescriptor {
    pub code: Option<String>,
}

impl CountryDescriptor {
    /// The code of the first reported currency, if any
    #[must_use]
    pub fn primary_currency_code(&self) -> Option<&str> {
        self.currencies.first().and_then(|c| c.code.as_deref())
    }
}
