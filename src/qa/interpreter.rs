// ============================================================
// Layer 5 — Question Interpreter
// ============================================================
// Answers one question against the student table:
//
//   1. Normalise (lowercase, clean whitespace)
//   2. Extract the student id       → none?    "Please specify…"
//   3. Look the id up in the table  → missing? "No student found…"
//   4. Detect the intent            → none?    "Sorry, I couldn't…"
//   5. Render the matching template
//
// Stateless: the same question against the same table always
// gives the same answer, and nothing is written anywhere.

use std::sync::Arc;

use crate::data::dataset::StudentTable;
use crate::domain::intent::Intent;
use crate::domain::traits::QuestionAnswerer;
use crate::qa::{id_pattern::IdPattern, normalizer::Normalizer, responses};

pub struct Interpreter {
    table:      Arc<StudentTable>,
    id_pattern: IdPattern,
    normalizer: Normalizer,
}

impl Interpreter {
    pub fn new(table: Arc<StudentTable>, id_pattern: IdPattern) -> Self {
        Self {
            table,
            id_pattern,
            normalizer: Normalizer::new(),
        }
    }
}

impl QuestionAnswerer for Interpreter {
    fn answer(&self, question: &str) -> String {
        let question = self.normalizer.normalize(question);

        let Some(id) = self.id_pattern.extract(&question) else {
            tracing::debug!("No {}-digit id in question", self.id_pattern.digits());
            return responses::MISSING_ID.to_string();
        };

        let Some(student) = self.table.get(id) else {
            tracing::debug!("Unknown student id {}", id);
            return responses::student_not_found(id);
        };

        match Intent::detect(&question) {
            Some(intent) => {
                tracing::debug!("Answering {:?} for student {}", intent, id);
                responses::render(intent, student)
            }
            None => responses::NOT_UNDERSTOOD.to_string(),
        }
    }
}
