use anyhow::Result;
use std::collections::HashMap;

use crate::data::loader::DatasetError;
use crate::domain::student::StudentRecord;
use crate::domain::traits::StudentSource;

/// Read-only id → StudentRecord table.
///
/// Built once at startup and then only ever borrowed; requests
/// share it through an `Arc` without locking.
#[derive(Debug, Default)]
pub struct StudentTable {
    records: HashMap<u32, StudentRecord>,
}

impl StudentTable {
    /// Build a table from records, rejecting duplicate ids.
    pub fn from_records(
        records: Vec<StudentRecord>,
    ) -> std::result::Result<Self, DatasetError> {
        let mut map = HashMap::with_capacity(records.len());
        for record in records {
            let id = record.id;
            if map.insert(id, record).is_some() {
                return Err(DatasetError::DuplicateId { id });
            }
        }
        Ok(Self { records: map })
    }

    /// Load every record from a source and index it.
    pub fn load(source: &dyn StudentSource) -> Result<Self> {
        let table = Self::from_records(source.load_all()?)?;
        if table.is_empty() {
            tracing::warn!("Student dataset is empty, every lookup will miss");
        }
        tracing::info!("Loaded {} students", table.len());
        Ok(table)
    }

    pub fn get(&self, id: u32) -> Option<&StudentRecord> {
        self.records.get(&id)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn asha() -> StudentRecord {
        StudentRecord::new(1001, "Asha", "10-A", "asha@example.com", 95.0, 88.0, 79.0)
    }

    struct InMemory(Vec<StudentRecord>);

    impl StudentSource for InMemory {
        fn load_all(&self) -> Result<Vec<StudentRecord>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn test_lookup_hit_and_miss() {
        let table = StudentTable::from_records(vec![asha()]).unwrap();
        assert_eq!(table.get(1001).map(|s| s.name.as_str()), Some("Asha"));
        assert!(table.get(1002).is_none());
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = StudentTable::from_records(vec![asha(), asha()]).unwrap_err();
        assert!(matches!(err, DatasetError::DuplicateId { id: 1001 }));
    }

    #[test]
    fn test_load_from_source() {
        let table = StudentTable::load(&InMemory(vec![asha()])).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn test_load_duplicate_from_source_fails() {
        assert!(StudentTable::load(&InMemory(vec![asha(), asha()])).is_err());
    }
}
