use std::fmt;

use thiserror::Error;
use url::form_urlencoded;

/// Query-string key carrying the category.
pub const CATEGORY_PARAM: &str = "cat";
/// Query-string key carrying the difficulty.
pub const DIFFICULTY_PARAM: &str = "diff";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ParamsError {
    #[error("missing required parameter `{name}`")]
    Missing { name: &'static str },
}

/// Category and difficulty requested for a quiz.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct QuizParams {
    category: String,
    difficulty: String,
}

impl QuizParams {
    /// # Errors
    ///
    /// Returns `ParamsError::Missing` if either value is blank.
    pub fn new(
        category: impl Into<String>,
        difficulty: impl Into<String>,
    ) -> Result<Self, ParamsError> {
        let category = category.into();
        if category.trim().is_empty() {
            return Err(ParamsError::Missing {
                name: CATEGORY_PARAM,
            });
        }
        let difficulty = difficulty.into();
        if difficulty.trim().is_empty() {
            return Err(ParamsError::Missing {
                name: DIFFICULTY_PARAM,
            });
        }
        Ok(Self {
            category,
            difficulty,
        })
    }

    /// Parse `cat` and `diff` out of a query string such as `?cat=general&diff=easy`.
    ///
    /// Values are percent-decoded. When a key repeats, the first value wins.
    ///
    /// # Errors
    ///
    /// Returns `ParamsError::Missing` if either key is absent or blank.
    pub fn from_query(query: &str) -> Result<Self, ParamsError> {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut category = None;
        let mut difficulty = None;

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            match key.as_ref() {
                CATEGORY_PARAM if category.is_none() => category = Some(value.into_owned()),
                DIFFICULTY_PARAM if difficulty.is_none() => difficulty = Some(value.into_owned()),
                _ => {}
            }
        }

        Self::new(category.unwrap_or_default(), difficulty.unwrap_or_default())
    }

    /// Encode as a query string (without the leading `?`).
    #[must_use]
    pub fn to_query(&self) -> String {
        form_urlencoded::Serializer::new(String::new())
            .append_pair(CATEGORY_PARAM, &self.category)
            .append_pair(DIFFICULTY_PARAM, &self.difficulty)
            .finish()
    }

    #[must_use]
    pub fn category(&self) -> &str {
        &self.category
    }

    #[must_use]
    pub fn difficulty(&self) -> &str {
        &self.difficulty
    }
}

impl fmt::Display for QuizParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.category, self.difficulty)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_query_with_or_without_question_mark() {
        let a = QuizParams::from_query("?cat=general&diff=easy").unwrap();
        let b = QuizParams::from_query("diff=easy&cat=general").unwrap();

        assert_eq!(a, b);
        assert_eq!(a.category(), "general");
        assert_eq!(a.difficulty(), "easy");
    }

    #[test]
    fn decodes_percent_and_plus() {
        let params = QuizParams::from_query("cat=pop%20culture&diff=very+hard").unwrap();
        assert_eq!(params.category(), "pop culture");
        assert_eq!(params.difficulty(), "very hard");
    }

    #[test]
    fn first_value_wins() {
        let params = QuizParams::from_query("cat=a&cat=b&diff=easy").unwrap();
        assert_eq!(params.category(), "a");
    }

    #[test]
    fn missing_or_blank_values_are_rejected() {
        assert_eq!(
            QuizParams::from_query("diff=easy"),
            Err(ParamsError::Missing { name: "cat" })
        );
        assert_eq!(
            QuizParams::from_query("cat=general&diff="),
            Err(ParamsError::Missing { name: "diff" })
        );
        assert!(QuizParams::from_query("").is_err());
    }

    #[test]
    fn to_query_round_trips_through_from_query() {
        let params = QuizParams::new("pop culture", "easy & fun").unwrap();
        let query = params.to_query();

        assert!(!query.contains(' '));
        assert_eq!(QuizParams::from_query(&query).unwrap(), params);
    }
}
