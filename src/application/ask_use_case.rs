// ============================================================
// Layer 2 — Ask Use Case
// ============================================================
// Loads the student table once, then answers any number of
// questions against it:
//
//   Step 1: Read the CSV            (Layer 4 - data)
//   Step 2: Index rows by id        (Layer 4 - data)
//   Step 3: Compile the id pattern  (Layer 5 - qa)
//   Step 4: Answer questions        (Layer 5 - qa)
//
// A dataset that fails to load stops here; nothing downstream
// runs without one.

use anyhow::{Context, Result};
use std::sync::Arc;

use crate::application::config::AppConfig;
use crate::data::{dataset::StudentTable, loader::CsvStudentLoader};
use crate::domain::traits::{QuestionAnswerer, StudentSource};
use crate::qa::interpreter::Interpreter;

pub struct AskUseCase {
    interpreter: Interpreter,
    students:    usize,
}

impl AskUseCase {
    /// Load the dataset named by the config.
    pub fn new(config: &AppConfig) -> Result<Self> {
        let loader = CsvStudentLoader::new(&config.dataset_path);
        Self::from_source(&loader, config).with_context(|| {
            format!("Cannot load student dataset '{}'", config.dataset_path)
        })
    }

    /// Build from any StudentSource; lets tests skip the filesystem.
    pub fn from_source(source: &dyn StudentSource, config: &AppConfig) -> Result<Self> {
        let id_pattern = config.id_pattern()?;
        let table      = StudentTable::load(source)?;
        let students   = table.len();
        let interpreter = Interpreter::new(Arc::new(table), id_pattern);
        Ok(Self { interpreter, students })
    }

    /// Number of students available for lookup
    pub fn student_count(&self) -> usize {
        self.students
    }
}

impl QuestionAnswerer for AskUseCase {
    fn answer(&self, question: &str) -> String {
        self.interpreter.answer(question)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::student::StudentRecord;
    use std::io::Write;

    struct Fixed(Vec<StudentRecord>);

    impl StudentSource for Fixed {
        fn load_all(&self) -> Result<Vec<StudentRecord>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_answers_from_injected_source() {
        let source = Fixed(vec![StudentRecord::new(
            1001, "Asha", "10-A", "asha@example.com", 95.0, 88.0, 79.0,
        )]);
        let uc = AskUseCase::from_source(&source, &AppConfig::default()).unwrap();
        assert_eq!(uc.student_count(), 1);
        assert_eq!(uc.answer("math marks 1001"), "Asha's Maths marks: 95");
    }

    #[test]
    fn test_loads_csv_from_config() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        writeln!(f, "id,name,class,email,maths,science,social").unwrap();
        writeln!(f, "1002,Ravi,10-B,ravi@example.com,72,81,90").unwrap();

        let cfg = AppConfig {
            dataset_path: f.path().display().to_string(),
            ..AppConfig::default()
        };
        let uc = AskUseCase::new(&cfg).unwrap();
        assert_eq!(uc.answer("email 1002"), "Ravi's Email: ravi@example.com");
    }

    #[test]
    fn test_missing_dataset_is_fatal() {
        let cfg = AppConfig {
            dataset_path: "does/not/exist.csv".to_string(),
            ..AppConfig::default()
        };
        let err = AskUseCase::new(&cfg).err().unwrap();
        assert!(format!("{err:#}").contains("does/not/exist.csv"));
    }
}
