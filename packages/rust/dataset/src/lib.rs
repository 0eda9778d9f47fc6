//! CSV dataset loading with mock-table substitution.
//!
//! The builders interpolate a question bank and an operations benchmark into
//! the generated documents. Both tables come from local CSV files; a missing
//! or unreadable file is recovered by substituting a fixed mock table, never
//! surfaced as an error.

use std::path::Path;

use serde::Deserialize;
use tracing::debug;

use takehome_shared::{DatasetsConfig, Sourced};

// ---------------------------------------------------------------------------
// Records
// ---------------------------------------------------------------------------

/// One row of the categorized question bank.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct QuestionRecord {
    #[serde(rename = "Category")]
    pub category: String,
    #[serde(rename = "Question")]
    pub question: String,
    #[serde(rename = "Difficulty")]
    pub difficulty: String,
}

/// One row of the operations benchmark.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct OpsRecord {
    #[serde(rename = "Operation")]
    pub operation: String,
    #[serde(rename = "Time_Hours")]
    pub time_hours: f64,
    #[serde(rename = "Success_Rate")]
    pub success_rate: f64,
}

/// Both loaded tables, each tagged with its origin.
#[derive(Debug, Clone)]
pub struct Datasets {
    pub questions: Sourced<Vec<QuestionRecord>>,
    pub ops: Sourced<Vec<OpsRecord>>,
}

// ---------------------------------------------------------------------------
// Loading
// ---------------------------------------------------------------------------

/// Load both datasets from the configured paths.
///
/// Cannot fail: each table falls back to its mock counterpart when the file
/// is absent or malformed.
pub fn load_datasets(config: &DatasetsConfig) -> Datasets {
    Datasets {
        questions: load_table(&config.questions_path, mock_questions),
        ops: load_table(&config.ops_path, mock_ops),
    }
}

/// Read one CSV table, substituting the mock table on any failure.
fn load_table<T, F>(path: &str, mock: F) -> Sourced<Vec<T>>
where
    T: for<'de> Deserialize<'de>,
    F: FnOnce() -> Vec<T>,
{
    match read_csv(Path::new(path)) {
        Ok(rows) if !rows.is_empty() => Sourced::Fetched(rows),
        Ok(_) => {
            debug!(path, "dataset file is empty, substituting mock table");
            Sourced::Fallback(mock())
        }
        Err(e) => {
            debug!(path, error = %e, "dataset file unavailable, substituting mock table");
            Sourced::Fallback(mock())
        }
    }
}

fn read_csv<T: for<'de> Deserialize<'de>>(path: &Path) -> Result<Vec<T>, csv::Error> {
    let mut reader = csv::Reader::from_path(path)?;
    reader.deserialize().collect()
}

// ---------------------------------------------------------------------------
// Mock tables
// ---------------------------------------------------------------------------

fn mock_questions() -> Vec<QuestionRecord> {
    let rows = [
        (
            "SQL",
            "Write a query to find the top 5 customers by revenue",
            "Medium",
        ),
        (
            "Python",
            "Implement a function to calculate moving averages",
            "Easy",
        ),
        (
            "Statistics",
            "Explain the difference between Type I and Type II errors",
            "Medium",
        ),
        (
            "Machine Learning",
            "How would you evaluate a recommendation system?",
            "Hard",
        ),
        (
            "Analytics",
            "Design metrics for measuring user engagement",
            "Medium",
        ),
    ];

    rows.into_iter()
        .map(|(category, question, difficulty)| QuestionRecord {
            category: category.into(),
            question: question.into(),
            difficulty: difficulty.into(),
        })
        .collect()
}

fn mock_ops() -> Vec<OpsRecord> {
    let rows = [
        ("Data Collection", 2.0, 0.95),
        ("Data Processing", 4.0, 0.90),
        ("Model Training", 8.0, 0.85),
        ("Deployment", 3.0, 0.92),
    ];

    rows.into_iter()
        .map(|(operation, time_hours, success_rate)| OpsRecord {
            operation: operation.into(),
            time_hours,
            success_rate,
        })
        .collect()
}
