//! Locale-aware string ordering

use icu_collator::{Collator, CollatorOptions};
use icu_locid::Locale;
use std::cmp::Ordering;
use std::fmt;

use crate::error::{Error, Result};

/// Compares strings the way a reader of `locale` expects
/// (alphabet order, not code point order).
pub struct Collation {
    locale: String,
    collator: Collator,
}

impl Collation {
    pub fn new(locale: &str) -> Result<Self> {
        let unavailable = |message: String| Error::Collation {
            locale: locale.to_string(),
            message,
        };

        let parsed: Locale = locale
            .parse()
            .map_err(|e| unavailable(format!("{e:?}")))?;
        let collator = Collator::try_new(&parsed.into(), CollatorOptions::new())
            .map_err(|e| unavailable(format!("{e:?}")))?;

        Ok(Self {
            locale: locale.to_string(),
            collator,
        })
    }

    pub fn locale(&self) -> &str {
        &self.locale
    }

    pub fn compare(&self, a: &str, b: &str) -> Ordering {
        self.collator.compare(a, b)
    }
}

impl fmt::Debug for Collation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Collation")
            .field("locale", &self.locale)
            .finish_non_exhaustive()
    }
}
