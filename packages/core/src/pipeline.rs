//! Vacancy search pipeline.
//!
//! Fetches postings for a search phrase from a [`VacancySource`], which
//! normalizes salaries and validates every posting, then saves the
//! resulting records into a [`VacancyStore`] in a single write.

use crate::error::AppError;
use crate::store::VacancyStore;
use crate::vacancy::VacancySource;

/// What one search run did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchSummary {
    /// Records written to the store.
    pub saved: usize,
    /// Total matches reported by the source.
    pub found: u64,
    /// Postings dropped before reaching the store.
    pub skipped: usize,
}

/// Run a search and persist its results.
///
/// A source failure aborts the run before anything is written, so the store
/// never receives a partial batch.
pub async fn run_search<S, T>(source: &S, store: &T, text: &str) -> Result<SearchSummary, AppError>
where
    S: VacancySource + Sync + ?Sized,
    T: VacancyStore + ?Sized,
{
    let fetched = match source.fetch_vacancies(text).await {
        Ok(fetched) => fetched,
        Err(err) => {
            tracing::error!("{} search failed: {}", source.source_name(), err);
            return Err(err.into());
        }
    };

    if fetched.records.is_empty() {
        tracing::warn!("{} returned no vacancies with a salary for '{}'", source.source_name(), text);
    } else {
        store.upsert_many(&fetched.records)?;
    }

    Ok(SearchSummary {
        saved: fetched.records.len(),
        found: fetched.found,
        skipped: fetched.skipped,
    })
}
