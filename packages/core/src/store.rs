//! File-backed vacancy store.
//!
//! `JsonVacancyStore` keeps every saved posting in a single JSON object
//! keyed by the posting URL:
//!
//! ```json
//! {
//!     "https://hh.ru/vacancy/1": {
//!         "name": "Rust developer",
//!         "salary": "от 100 до 200 руб.",
//!         "average_salary": [100, 200],
//!         "city": "Москва",
//!         "created_date": "16.09.2025",
//!         "employer_url": null
//!     }
//! }
//! ```
//!
//! Each operation loads the whole file, mutates it in memory and writes it
//! back. Writes go to a temporary file beside the target which is then
//! renamed over it, so readers never observe a half-written file. Entries
//! keep their insertion order on disk.

use std::fmt;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use tempfile::NamedTempFile;
use thiserror::Error;
use url::Url;

use crate::vacancy::error::VacancyError;
use crate::vacancy::record::{NewVacancy, VacancyRecord, DATE_FORMAT};
use crate::vacancy::salary::ComparableSalary;

/// Default location of the store file, relative to the working directory.
pub const DEFAULT_STORE_PATH: &str = "vacancies.json";

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access vacancy store {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Vacancy store {} is not valid JSON: {source}", path.display())]
    Format {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored vacancy {url} is malformed: {source}")]
    Entry {
        url: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Stored vacancy {url} is invalid: {source}")]
    Record {
        url: String,
        #[source]
        source: VacancyError,
    },
}

/// Result of a minimum-salary query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryOutcome {
    /// Matching records in storage order.
    Found(Vec<VacancyRecord>),
    NotFound { threshold: i64 },
}

/// Result of a delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted,
    NotFound { url: String },
}

impl fmt::Display for QueryOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryOutcome::Found(records) => {
                for record in records {
                    writeln!(f, "{}", record.details())?;
                }
                Ok(())
            }
            QueryOutcome::NotFound { threshold } => {
                write!(f, "Вакансий с зп от {} не найдено.", threshold)
            }
        }
    }
}

impl fmt::Display for DeleteOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DeleteOutcome::Deleted => write!(f, "Вакансия удалена."),
            DeleteOutcome::NotFound { .. } => write!(f, "Такой вакансии не существует!"),
        }
    }
}

/// Persistence for vacancy records keyed by posting URL.
pub trait VacancyStore {
    /// Insert `record`, replacing any entry with the same URL.
    fn upsert(&self, record: &VacancyRecord) -> Result<(), StoreError>;

    /// Insert every record in one read-modify-write cycle.
    fn upsert_many(&self, records: &[VacancyRecord]) -> Result<(), StoreError>;

    /// Records whose salary reaches at least `threshold`.
    fn query_by_min_salary(&self, threshold: i64) -> Result<QueryOutcome, StoreError>;

    /// Remove the entry stored under `url`, if any.
    fn delete(&self, url: &str) -> Result<DeleteOutcome, StoreError>;

    /// Every stored record in storage order.
    fn all(&self) -> Result<Vec<VacancyRecord>, StoreError>;

    fn delete_record(&self, record: &VacancyRecord) -> Result<DeleteOutcome, StoreError> {
        self.delete(record.url().as_str())
    }
}

/// On-disk shape of one entry; the URL is the map key.
#[derive(Debug, Clone, Serialize, Deserialize)]
struct StoredVacancy {
    name: String,
    salary: Option<String>,
    average_salary: ComparableSalary,
    city: String,
    created_date: String,
    #[serde(default)]
    employer_url: Option<String>,
}

impl StoredVacancy {
    fn from_record(record: &VacancyRecord) -> Self {
        Self {
            name: record.name().to_string(),
            salary: record.salary_text().map(str::to_string),
            average_salary: record.comparable_salary(),
            city: record.city().to_string(),
            created_date: record.created_date().format(DATE_FORMAT).to_string(),
            employer_url: record.employer_url().map(Url::to_string),
        }
    }

    fn into_record(self, url: &str) -> Result<VacancyRecord, StoreError> {
        VacancyRecord::new(NewVacancy {
            name: self.name,
            salary_text: self.salary,
            comparable_salary: self.average_salary,
            city: self.city,
            url: url.to_string(),
            created_date: self.created_date,
            employer_url: self.employer_url,
        })
        .map_err(|source| StoreError::Record {
            url: url.to_string(),
            source,
        })
    }
}

/// JSON file implementation of [`VacancyStore`].
#[derive(Debug, Clone)]
pub struct JsonVacancyStore {
    path: PathBuf,
}

impl JsonVacancyStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load the full mapping. A missing or blank file is an empty store.
    fn load(&self) -> Result<Map<String, Value>, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(Map::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                })
            }
        };

        if contents.trim().is_empty() {
            return Ok(Map::new());
        }

        serde_json::from_str(&contents).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })
    }

    /// Replace the file with `entries` via a same-directory temp file.
    fn save(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        let io_error = |source: io::Error| StoreError::Io {
            path: self.path.clone(),
            source,
        };

        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let body = serde_json::to_string_pretty(entries).map_err(|source| StoreError::Format {
            path: self.path.clone(),
            source,
        })?;

        let mut file = NamedTempFile::new_in(dir).map_err(io_error)?;
        file.write_all(body.as_bytes()).map_err(io_error)?;
        file.flush().map_err(io_error)?;
        file.persist(&self.path).map_err(|err| io_error(err.error))?;

        tracing::debug!("Wrote {} vacancies to {}", entries.len(), self.path.display());
        Ok(())
    }

    fn insert(entries: &mut Map<String, Value>, record: &VacancyRecord) -> Result<(), StoreError> {
        let url = record.url().to_string();
        let value = serde_json::to_value(StoredVacancy::from_record(record))
            .map_err(|source| StoreError::Entry {
                url: url.clone(),
                source,
            })?;
        entries.insert(url, value);
        Ok(())
    }

    fn decode(url: &str, value: &Value) -> Result<StoredVacancy, StoreError> {
        StoredVacancy::deserialize(value).map_err(|source| StoreError::Entry {
            url: url.to_string(),
            source,
        })
    }
}

impl VacancyStore for JsonVacancyStore {
    fn upsert(&self, record: &VacancyRecord) -> Result<(), StoreError> {
        self.upsert_many(std::slice::from_ref(record))
    }

    fn upsert_many(&self, records: &[VacancyRecord]) -> Result<(), StoreError> {
        let mut entries = self.load()?;
        for record in records {
            Self::insert(&mut entries, record)?;
        }
        self.save(&entries)?;

        tracing::info!(
            "Saved {} vacancies to {} ({} total)",
            records.len(),
            self.path.display(),
            entries.len()
        );
        Ok(())
    }

    fn query_by_min_salary(&self, threshold: i64) -> Result<QueryOutcome, StoreError> {
        let entries = self.load()?;
        let mut matches = Vec::new();

        for (url, value) in &entries {
            let stored = Self::decode(url, value)?;
            if stored.average_salary.fits(threshold) {
                matches.push(stored.into_record(url)?);
            }
        }

        tracing::debug!(
            "{} of {} stored vacancies pay at least {}",
            matches.len(),
            entries.len(),
            threshold
        );

        if matches.is_empty() {
            Ok(QueryOutcome::NotFound { threshold })
        } else {
            Ok(QueryOutcome::Found(matches))
        }
    }

    fn delete(&self, url: &str) -> Result<DeleteOutcome, StoreError> {
        let key = Url::parse(url.trim())
            .map(|parsed| parsed.to_string())
            .unwrap_or_else(|_| url.to_string());

        let mut entries = self.load()?;
        if entries.shift_remove(&key).is_none() {
            tracing::warn!("Vacancy {} does not exist in {}", key, self.path.display());
            return Ok(DeleteOutcome::NotFound { url: key });
        }

        self.save(&entries)?;
        tracing::info!("Deleted vacancy {}", key);
        Ok(DeleteOutcome::Deleted)
    }

    fn all(&self) -> Result<Vec<VacancyRecord>, StoreError> {
        self.load()?
            .iter()
            .map(|(url, value)| Self::decode(url, value)?.into_record(url))
            .collect()
    }
}
