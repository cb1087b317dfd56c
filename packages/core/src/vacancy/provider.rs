//! Vacancy Source Interface
//!
//! Abstraction over remote job boards that can be searched by free text.

use async_trait::async_trait;

use crate::vacancy::{error::ProviderError, record::VacancyRecord};

/// Records collected by a single search.
#[derive(Debug, Clone, Default)]
pub struct FetchedVacancies {
    pub records: Vec<VacancyRecord>,
    /// Total matches the remote reported, before any filtering.
    pub found: u64,
    /// Postings dropped for lacking a salary or failing validation.
    pub skipped: usize,
}

#[async_trait]
pub trait VacancySource {
    /// Search postings matching `text`, keeping only those with a salary.
    async fn fetch_vacancies(&self, text: &str) -> Result<FetchedVacancies, ProviderError>;

    /// Get the name of this source for logging
    fn source_name(&self) -> &str;
}
