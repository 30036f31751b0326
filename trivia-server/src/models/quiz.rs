//! Quiz play request types

use serde::Deserialize;

/// POST /quizzes request body
#[derive(Debug, Clone, Deserialize)]
pub struct QuizRequest {
    pub previous_questions: Vec<i32>,
    pub quiz_category: QuizCategory,
}

/// Category selector for quiz play. Clients also send a `type` label
/// alongside the id; only the id matters here.
#[derive(Debug, Clone, Deserialize)]
pub struct QuizCategory {
    pub id: CategoryId,
}

/// Category id as clients actually send it: a JSON number or its string
/// form. The numeric 0 selects all categories; a string id is matched
/// verbatim against the stored category text.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum CategoryId {
    Num(i64),
    Text(String),
}

impl CategoryId {
    /// Whether this selects all categories.
    pub fn is_all(&self) -> bool {
        matches!(self, Self::Num(0))
    }

    /// The stored `questions.category` key this id matches.
    pub fn as_key(&self) -> String {
        match self {
            Self::Num(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn accepts_numeric_and_string_ids() {
        let req: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [1, 2],
            "quiz_category": {"type": "Science", "id": "1"}
        }))
        .unwrap();
        assert_eq!(req.quiz_category.id, CategoryId::Text("1".into()));
        assert_eq!(req.previous_questions, vec![1, 2]);

        let req: QuizRequest = serde_json::from_value(json!({
            "previous_questions": [],
            "quiz_category": {"id": 4}
        }))
        .unwrap();
        assert_eq!(req.quiz_category.id, CategoryId::Num(4));
    }

    #[test]
    fn numeric_zero_selects_all() {
        assert!(CategoryId::Num(0).is_all());
        assert!(!CategoryId::Num(1).is_all());
        // A string "0" is a literal category key, not the all-selector
        assert!(!CategoryId::Text("0".into()).is_all());
    }

    #[test]
    fn key_is_the_stored_string_form() {
        assert_eq!(CategoryId::Num(3).as_key(), "3");
        assert_eq!(CategoryId::Text("3".into()).as_key(), "3");
    }

    #[test]
    fn missing_fields_fail_to_decode() {
        assert!(serde_json::from_value::<QuizRequest>(json!({
            "previous_questions": []
        }))
        .is_err());
        assert!(serde_json::from_value::<QuizRequest>(json!({
            "quiz_category": {"id": 1}
        }))
        .is_err());
    }
}
