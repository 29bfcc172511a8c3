// ============================================================
// Layer 2 — Application Configuration
// ============================================================
// Every setting a run needs. Serialisable so a deployment can
// keep it in a JSON file:
//
//   {
//     "dataset_path": "data/students.csv",
//     "bind": "127.0.0.1:8000",
//     "id_digits": 4,
//     "max_question_len": 255
//   }
//
// Missing keys fall back to the defaults below; command line
// flags override whatever the file says (see Layer 1).

use anyhow::Result;
use serde::{Deserialize, Serialize};

use crate::qa::id_pattern::{IdPattern, DEFAULT_ID_DIGITS};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// CSV file with columns id,name,class,email,maths,science,social
    pub dataset_path: String,

    /// Address the web form listens on
    pub bind: String,

    /// Length of the digit run treated as a student id
    pub id_digits: usize,

    /// Longest question the form accepts, in characters
    pub max_question_len: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            dataset_path:     "data/students.csv".to_string(),
            bind:             "127.0.0.1:8000".to_string(),
            id_digits:        DEFAULT_ID_DIGITS,
            max_question_len: 255,
        }
    }
}

impl AppConfig {
    /// Compile the configured id rule, rejecting out-of-range lengths.
    pub fn id_pattern(&self) -> Result<IdPattern> {
        IdPattern::new(self.id_digits)
    }
}
