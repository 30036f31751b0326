//! Question record and creation payload

use serde::Serialize;
use serde_json::Value;
use sqlx::FromRow;

use super::ValidationError;

/// A trivia question as stored and served.
///
/// `category` holds the string form of a category id. The schema keeps it
/// as loose text rather than a foreign key, and clients depend on
/// receiving it as a string.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, FromRow)]
pub struct Question {
    pub id: i32,
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

/// A validated question ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub question: String,
    pub answer: String,
    pub category: String,
    pub difficulty: i32,
}

impl NewQuestion {
    /// Build a new question from the raw POST body fields.
    ///
    /// Clients send category as either a string or an integer, and
    /// difficulty as either an integer or a numeric string. Difficulty
    /// must be numeric; everything else here is required as-is.
    pub fn from_body(
        question: Option<String>,
        answer: Option<String>,
        category: Option<Value>,
        difficulty: Option<Value>,
    ) -> Result<Self, ValidationError> {
        let question = question.ok_or(ValidationError::Missing { field: "question" })?;
        let answer = answer.ok_or(ValidationError::Missing { field: "answer" })?;
        let category = normalize_category(category)?;
        let difficulty = parse_difficulty(difficulty)?;

        Ok(Self {
            question,
            answer,
            category,
            difficulty,
        })
    }
}

/// Reduce the loosely-typed category reference to its stored string form.
fn normalize_category(value: Option<Value>) -> Result<String, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::Missing { field: "category" }),
        Some(Value::String(s)) => Ok(s),
        Some(Value::Number(n)) => Ok(n.to_string()),
        Some(_) => Err(ValidationError::InvalidType { field: "category" }),
    }
}

/// Difficulty must be numeric: a JSON integer, or a string that parses as
/// one.
fn parse_difficulty(value: Option<Value>) -> Result<i32, ValidationError> {
    match value {
        None | Some(Value::Null) => Err(ValidationError::Missing { field: "difficulty" }),
        Some(Value::Number(n)) => n
            .as_i64()
            .and_then(|n| i32::try_from(n).ok())
            .ok_or_else(|| ValidationError::NotNumeric {
                field: "difficulty",
                value: n.to_string(),
            }),
        Some(Value::String(s)) => match s.trim().parse::<i32>() {
            Ok(n) => Ok(n),
            Err(_) => Err(ValidationError::NotNumeric {
                field: "difficulty",
                value: s,
            }),
        },
        Some(_) => Err(ValidationError::InvalidType { field: "difficulty" }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_body(category: Value, difficulty: Value) -> Result<NewQuestion, ValidationError> {
        NewQuestion::from_body(
            Some("What is the capitol of Missouri?".into()),
            Some("Jefferson City".into()),
            Some(category),
            Some(difficulty),
        )
    }

    #[test]
    fn accepts_integer_difficulty() {
        let new = full_body(json!("3"), json!(1)).unwrap();
        assert_eq!(new.category, "3");
        assert_eq!(new.difficulty, 1);
    }

    #[test]
    fn accepts_numeric_string_difficulty() {
        let new = full_body(json!("3"), json!("2")).unwrap();
        assert_eq!(new.difficulty, 2);
    }

    #[test]
    fn rejects_non_numeric_difficulty() {
        let err = full_body(json!("3"), json!("asdasd")).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::NotNumeric {
                field: "difficulty",
                ..
            }
        ));
    }

    #[test]
    fn integer_category_is_stored_as_string() {
        let new = full_body(json!(3), json!(1)).unwrap();
        assert_eq!(new.category, "3");
    }

    #[test]
    fn missing_fields_are_rejected() {
        let err = NewQuestion::from_body(None, None, None, None).unwrap_err();
        assert!(matches!(err, ValidationError::Missing { field: "question" }));

        let err = NewQuestion::from_body(
            Some("q".into()),
            Some("a".into()),
            Some(json!("1")),
            None,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Missing {
                field: "difficulty"
            }
        ));
    }

    #[test]
    fn null_difficulty_is_missing() {
        let err = full_body(json!("3"), Value::Null).unwrap_err();
        assert!(matches!(
            err,
            ValidationError::Missing {
                field: "difficulty"
            }
        ));
    }

    #[test]
    fn question_serializes_with_five_keys() {
        let q = Question {
            id: 7,
            question: "q".into(),
            answer: "a".into(),
            category: "1".into(),
            difficulty: 2,
        };
        let value = serde_json::to_value(&q).unwrap();
        assert_eq!(
            value,
            json!({"id": 7, "question": "q", "answer": "a", "category": "1", "difficulty": 2})
        );
    }
}
