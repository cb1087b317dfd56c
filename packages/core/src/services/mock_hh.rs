//! In-memory vacancy source for unit tests.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::vacancy::{
    error::ProviderError,
    provider::{FetchedVacancies, VacancySource},
    record::{NewVacancy, VacancyRecord},
    salary::ComparableSalary,
};

#[derive(Default)]
pub struct MockVacancySource {
    records: Vec<VacancyRecord>,
    error: Mutex<Option<ProviderError>>,
    queries: Mutex<Vec<String>>,
}

impl MockVacancySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_records(mut self, records: Vec<VacancyRecord>) -> Self {
        self.records = records;
        self
    }

    /// Fail the next fetch with `error`.
    pub fn with_error(self, error: ProviderError) -> Self {
        *self.error.lock().unwrap() = Some(error);
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl VacancySource for MockVacancySource {
    async fn fetch_vacancies(&self, text: &str) -> Result<FetchedVacancies, ProviderError> {
        self.queries.lock().unwrap().push(text.to_string());

        if let Some(error) = self.error.lock().unwrap().take() {
            return Err(error);
        }

        Ok(FetchedVacancies {
            records: self.records.clone(),
            found: self.records.len() as u64,
            skipped: 0,
        })
    }

    fn source_name(&self) -> &str {
        "Mock"
    }
}

pub fn make_record(id: u32, salary: ComparableSalary) -> VacancyRecord {
    VacancyRecord::new(NewVacancy {
        name: format!("Vacancy {}", id),
        salary_text: Some(format!("{} руб.", salary)),
        comparable_salary: salary,
        city: "Москва".to_string(),
        url: format!("https://hh.ru/vacancy/{}", id),
        created_date: "16.09.2025".to_string(),
        employer_url: Some(format!("https://hh.ru/employer/{}", id)),
    })
    .unwrap()
}
