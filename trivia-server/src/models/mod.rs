//! Domain models and request validation

pub mod category;
pub mod pagination;
pub mod question;
pub mod quiz;
pub mod validation;

pub use category::{category_map, Category};
pub use pagination::{page_slice, parse_page, QUESTIONS_PER_PAGE};
pub use question::{NewQuestion, Question};
pub use quiz::{CategoryId, QuizCategory, QuizRequest};
pub use validation::ValidationError;
