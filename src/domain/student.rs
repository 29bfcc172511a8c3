// ============================================================
// Layer 3 — StudentRecord Domain Type
// ============================================================
// One row of the student dataset. The column names in the CSV
// header map one-to-one onto these fields via serde, so the
// loader never has to know the column order.
//
// Example row:
//   id,name,class,email,maths,science,social
//   1001,Asha,10-A,asha@example.com,95,88,79
//
// Scores hold an f64 so both "95" and "88.5" load. Rust's Display
// for f64 prints 95.0 as "95", which keeps whole-number marks
// looking the way they do in the file.
//
// A blank score cell is not an error: the row still loads and
// the missing mark prints as "nan". Non-numeric text such as
// "lots" still fails the load.

use serde::Deserialize;
use std::fmt;

/// One subject mark; None when the cell was left blank.
#[derive(Debug, Clone, Copy, PartialEq, Default, Deserialize)]
#[serde(transparent)]
pub struct Score(Option<f64>);

impl From<f64> for Score {
    fn from(v: f64) -> Self {
        Self(Some(v))
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Some(v) => write!(f, "{v}"),
            None    => f.write_str("nan"),
        }
    }
}

/// A single student as read from the dataset.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct StudentRecord {
    /// Unique key; at most one record per id
    pub id: u32,

    pub name: String,

    /// Class/section label, e.g. "10-A"
    pub class: String,

    pub email: String,

    pub maths:   Score,
    pub science: Score,
    pub social:  Score,
}

impl StudentRecord {
    /// Build a record in code; the loader builds them through serde.
    #[cfg(test)]
    pub fn new(
        id:      u32,
        name:    impl Into<String>,
        class:   impl Into<String>,
        email:   impl Into<String>,
        maths:   f64,
        science: f64,
        social:  f64,
    ) -> Self {
        Self {
            id,
            name:    name.into(),
            class:   class.into(),
            email:   email.into(),
            maths:   maths.into(),
            science: science.into(),
            social:  social.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_whole_scores_display_without_fraction() {
        let s = StudentRecord::new(1001, "Asha", "10-A", "asha@example.com", 95.0, 88.5, 79.0);
        assert_eq!(format!("{}", s.maths), "95");
        assert_eq!(format!("{}", s.science), "88.5");
    }

    #[test]
    fn test_missing_score_displays_nan() {
        assert_eq!(Score::default().to_string(), "nan");
        assert_ne!(Score::default(), Score::from(0.0));
    }
}
