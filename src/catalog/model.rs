use std::path::Path;

use chrono::NaiveDate;

use crate::{
    catalog::select::DateCursor,
    foundation::error::{DailyJokeError, DailyJokeResult},
};

/// One question/answer pair. Its identity is its position in the catalog.
#[derive(Clone, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Joke {
    pub question: String,
    pub answer: String,
}

/// Ordered, non-empty list of jokes. Order defines the date-to-joke mapping.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct JokeCatalog {
    jokes: Vec<Joke>,
}

impl JokeCatalog {
    /// Fails with a config error when `jokes` is empty.
    pub fn new(jokes: Vec<Joke>) -> DailyJokeResult<Self> {
        if jokes.is_empty() {
            return Err(DailyJokeError::config(
                "joke catalog must contain at least one entry",
            ));
        }
        Ok(Self { jokes })
    }

    pub fn from_json_str(json: &str) -> DailyJokeResult<Self> {
        let jokes: Vec<Joke> = serde_json::from_str(json)
            .map_err(|e| DailyJokeError::catalog(format!("parse catalog JSON: {e}")))?;
        Self::new(jokes)
    }

    #[tracing::instrument]
    pub fn load(path: &Path) -> DailyJokeResult<Self> {
        let json = std::fs::read_to_string(path).map_err(|e| {
            DailyJokeError::catalog(format!("read catalog '{}': {e}", path.display()))
        })?;
        let catalog = Self::from_json_str(&json)?;
        tracing::debug!(jokes = catalog.len(), "catalog loaded");
        Ok(catalog)
    }

    pub fn len(&self) -> usize {
        self.jokes.len()
    }

    /// Always false; kept for API symmetry with `len`.
    pub fn is_empty(&self) -> bool {
        self.jokes.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Joke> {
        self.jokes.get(index)
    }

    pub fn jokes(&self) -> &[Joke] {
        &self.jokes
    }

    /// Pick the joke shown on `today` for a catalog that starts on `start`.
    pub fn select(
        &self,
        start: NaiveDate,
        today: NaiveDate,
    ) -> DailyJokeResult<(DateCursor, &Joke)> {
        let cursor = DateCursor::new(start, today, self.len())?;
        let joke = self.jokes.get(cursor.index).ok_or_else(|| {
            DailyJokeError::config(format!("joke index {} out of range", cursor.index))
        })?;
        Ok((cursor, joke))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/catalog/model.rs"]
mod tests;
