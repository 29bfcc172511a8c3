// Fixed response templates.
//
// Every answer the interpreter can give is built here, so the
// exact wording lives in one file.

use crate::domain::intent::Intent;
use crate::domain::student::StudentRecord;

pub const MISSING_ID: &str = "Please specify a student ID like 1001.";

pub const NOT_UNDERSTOOD: &str = "Sorry, I couldn't understand the question.";

pub fn student_not_found(id: u32) -> String {
    format!("No student found with ID {id}.")
}

/// Render the answer for a recognised intent.
pub fn render(intent: Intent, s: &StudentRecord) -> String {
    match intent {
        Intent::Info => format!(
            "ID: {}\nName: {}\nClass: {}\nEmail: {}\n",
            s.id, s.name, s.class, s.email
        ),
        Intent::Maths   => format!("{}'s Maths marks: {}", s.name, s.maths),
        Intent::Science => format!("{}'s Science marks: {}", s.name, s.science),
        Intent::Social  => format!("{}'s Social marks: {}", s.name, s.social),
        Intent::Email   => format!("{}'s Email: {}", s.name, s.email),
    }
}
