use serde::Deserialize;
use thiserror::Error;

/// Body of `POST /` (application/x-www-form-urlencoded).
#[derive(Debug, Default, Deserialize)]
pub struct QuestionForm {
    #[serde(default)]
    pub question: String,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum FormError {
    #[error("This field is required.")]
    Required,

    #[error("Ensure this value has at most {max} characters (it has {got}).")]
    TooLong { max: usize, got: usize },
}

impl QuestionForm {
    /// Validate and return the cleaned (trimmed) question.
    pub fn clean(&self, max_len: usize) -> Result<&str, FormError> {
        let question = self.question.trim();
        if question.is_empty() {
            return Err(FormError::Required);
        }

        let got = question.chars().count();
        if got > max_len {
            return Err(FormError::TooLong { max: max_len, got });
        }
        Ok(question)
    }
}
