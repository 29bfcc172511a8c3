// ============================================================
// Layer 4 — Student CSV Loader
// ============================================================
// Loads the student dataset from a CSV file with a header row:
//
//   id,name,class,email,maths,science,social
//   1001,Asha,10-A,asha@example.com,95,88,79
//
// Columns are matched by header name through serde, so their
// order does not matter and extra columns are ignored. Fields
// are trimmed before parsing.
//
// A blank score cell loads as a missing mark. Otherwise there
// is no partial load: any unreadable or malformed row fails the
// whole load.

use anyhow::Result;
use std::path::PathBuf;
use thiserror::Error;

use crate::domain::student::StudentRecord;
use crate::domain::traits::StudentSource;

/// Why the dataset could not be loaded.
#[derive(Debug, Error)]
pub enum DatasetError {
    #[error("cannot open dataset '{}': {source}", .path.display())]
    Open {
        path:   PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("malformed row in '{}' at line {line}: {source}", .path.display())]
    Parse {
        path:   PathBuf,
        line:   u64,
        #[source]
        source: csv::Error,
    },

    #[error("duplicate student id {id}")]
    DuplicateId { id: u32 },
}

/// Loads StudentRecords from a CSV file.
/// Implements the StudentSource trait from Layer 3.
pub struct CsvStudentLoader {
    path: PathBuf,
}

impl CsvStudentLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read every row, stopping at the first bad one.
    pub fn read(&self) -> std::result::Result<Vec<StudentRecord>, DatasetError> {
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_path(&self.path)
            .map_err(|source| DatasetError::Open {
                path: self.path.clone(),
                source,
            })?;

        let mut records = Vec::new();
        for row in reader.deserialize::<StudentRecord>() {
            let record = row.map_err(|source| DatasetError::Parse {
                path: self.path.clone(),
                line: source.position().map(|p| p.line()).unwrap_or(0),
                source,
            })?;
            records.push(record);
        }

        tracing::debug!(
            "Read {} rows from '{}'",
            records.len(),
            self.path.display()
        );
        Ok(records)
    }
}

impl StudentSource for CsvStudentLoader {
    fn load_all(&self) -> Result<Vec<StudentRecord>> {
        Ok(self.read()?)
    }
}
