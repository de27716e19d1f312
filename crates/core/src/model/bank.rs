use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::model::question::Question;

/// Questions keyed by category, then difficulty.
///
/// Serializes as a plain nested JSON object:
/// `{ "<category>": { "<difficulty>": [question, ...] } }`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionBank {
    categories: BTreeMap<String, BTreeMap<String, Vec<Question>>>,
}

impl QuestionBank {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append questions to a category/difficulty pool, creating it if needed.
    pub fn insert(
        &mut self,
        category: impl Into<String>,
        difficulty: impl Into<String>,
        questions: impl IntoIterator<Item = Question>,
    ) {
        self.categories
            .entry(category.into())
            .or_default()
            .entry(difficulty.into())
            .or_default()
            .extend(questions);
    }

    /// The ordered pool for a category/difficulty pair, if both keys exist.
    #[must_use]
    pub fn pool(&self, category: &str, difficulty: &str) -> Option<&[Question]> {
        self.categories
            .get(category)
            .and_then(|difficulties| difficulties.get(difficulty))
            .map(Vec::as_slice)
    }

    #[must_use]
    pub fn has_category(&self, category: &str) -> bool {
        self.categories.contains_key(category)
    }

    pub fn categories(&self) -> impl Iterator<Item = &str> {
        self.categories.keys().map(String::as_str)
    }

    /// Difficulties available for a category, empty when the category is unknown.
    pub fn difficulties<'a>(&'a self, category: &str) -> impl Iterator<Item = &'a str> + use<'a> {
        self.categories
            .get(category)
            .into_iter()
            .flat_map(|difficulties| difficulties.keys().map(String::as_str))
    }

    /// Total number of questions across every pool.
    #[must_use]
    pub fn total_questions(&self) -> usize {
        self.categories
            .values()
            .flat_map(BTreeMap::values)
            .map(Vec::len)
            .sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_questions() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(n: usize) -> Question {
        Question::new(format!("Q{n}"), vec!["yes".into(), "no".into()], "yes").unwrap()
    }

    #[test]
    fn pool_requires_both_keys() {
        let mut bank = QuestionBank::new();
        bank.insert("general", "easy", (0..3).map(question));

        assert_eq!(bank.pool("general", "easy").map(<[Question]>::len), Some(3));
        assert!(bank.pool("general", "hard").is_none());
        assert!(bank.pool("science", "easy").is_none());
        assert!(bank.has_category("general"));
    }

    #[test]
    fn lists_categories_and_difficulties_in_key_order() {
        let mut bank = QuestionBank::new();
        bank.insert("science", "hard", [question(1)]);
        bank.insert("general", "medium", [question(2)]);
        bank.insert("general", "easy", [question(3)]);

        assert_eq!(bank.categories().collect::<Vec<_>>(), ["general", "science"]);
        assert_eq!(bank.difficulties("general").collect::<Vec<_>>(), ["easy", "medium"]);
        assert_eq!(bank.difficulties("history").count(), 0);
        assert_eq!(bank.total_questions(), 3);
    }

    #[test]
    fn parses_nested_json() {
        let raw = r#"{
            "general": {
                "easy": [
                    {"q": "2 + 2?", "options": ["3", "4"], "answer": "4"}
                ]
            }
        }"#;
        let bank: QuestionBank = serde_json::from_str(raw).unwrap();

        let pool = bank.pool("general", "easy").unwrap();
        assert_eq!(pool[0].prompt(), "2 + 2?");
        assert_eq!(pool[0].correct_answer(), "4");
    }
}
