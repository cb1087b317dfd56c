//! HeadHunter Vacancy Source Adapter
//!
//! Adapts the HeadHunterClient to implement the VacancySource trait:
//! walks the paged search results and turns each posting into a
//! [`VacancyRecord`].

use async_trait::async_trait;

use crate::services::hh::{HeadHunterClient, HhVacancy, SearchQuery};
use crate::vacancy::{
    error::{ProviderError, VacancyError},
    provider::{FetchedVacancies, VacancySource},
    record::{NewVacancy, VacancyRecord},
    salary::normalize,
};

/// The search API stops serving results past this many postings.
pub const DEFAULT_FETCH_LIMIT: usize = 2000;

/// Adapter that implements VacancySource for HeadHunterClient
pub struct HeadHunterSource {
    client: HeadHunterClient,
    area: u32,
    limit: usize,
}

impl HeadHunterSource {
    pub fn new(client: HeadHunterClient, area: u32, limit: usize) -> Self {
        Self {
            client,
            area,
            limit,
        }
    }
}

/// Convert one search result into a record.
///
/// `Ok(None)` means the posting discloses no salary and is dropped.
pub fn convert_vacancy(item: HhVacancy) -> Result<Option<VacancyRecord>, VacancyError> {
    let Some(salary) = item.salary else {
        return Ok(None);
    };
    let Some(normalized) = normalize(salary.from, salary.to) else {
        return Ok(None);
    };

    let record = VacancyRecord::new(NewVacancy {
        name: item.name,
        salary_text: Some(normalized.text),
        comparable_salary: normalized.comparable,
        city: item.area.name,
        url: item.alternate_url,
        created_date: item.created_at,
        employer_url: item.employer.and_then(|employer| employer.alternate_url),
    })?;

    Ok(Some(record))
}

#[async_trait]
impl VacancySource for HeadHunterSource {
    async fn fetch_vacancies(&self, text: &str) -> Result<FetchedVacancies, ProviderError> {
        let query = SearchQuery::new(text, self.area);
        let mut fetched = FetchedVacancies::default();
        let mut page = 0;

        while fetched.records.len() < self.limit {
            let body = self.client.fetch_page(&query, page).await?;
            if page == 0 {
                fetched.found = body.found;
            }
            tracing::debug!(
                "Fetched page {} of {} ({} items)",
                page + 1,
                body.pages,
                body.items.len()
            );

            if body.items.is_empty() {
                break;
            }

            for item in body.items {
                let url = item.alternate_url.clone();
                match convert_vacancy(item) {
                    Ok(Some(record)) => fetched.records.push(record),
                    Ok(None) => fetched.skipped += 1,
                    Err(e) => {
                        tracing::warn!("Skipping vacancy {}: {}", url, e);
                        fetched.skipped += 1;
                    }
                }
            }

            page += 1;
            if page >= body.pages {
                break;
            }
        }

        fetched.records.truncate(self.limit);

        tracing::info!(
            "{} search for '{}' collected {} vacancies ({} reported, {} skipped)",
            self.source_name(),
            text,
            fetched.records.len(),
            fetched.found,
            fetched.skipped
        );

        Ok(fetched)
    }

    fn source_name(&self) -> &str {
        "HeadHunter"
    }
}
