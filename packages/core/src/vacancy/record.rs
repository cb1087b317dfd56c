//! Validated vacancy entity.

use std::cmp::Ordering;
use std::fmt;

use chrono::{DateTime, NaiveDate};
use url::Url;

use crate::vacancy::error::VacancyError;
use crate::vacancy::salary::ComparableSalary;

/// Format used for `created_date` when a record is displayed or persisted.
pub const DATE_FORMAT: &str = "%d.%m.%Y";

/// Unvalidated field bundle a [`VacancyRecord`] is built from.
#[derive(Debug, Clone)]
pub struct NewVacancy {
    pub name: String,
    pub salary_text: Option<String>,
    pub comparable_salary: ComparableSalary,
    pub city: String,
    pub url: String,
    pub created_date: String,
    pub employer_url: Option<String>,
}

/// A single job posting.
///
/// Fields are private so every instance has passed [`VacancyRecord::new`].
/// The `url` is the posting's identity: two records with the same url are
/// the same posting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VacancyRecord {
    name: String,
    salary_text: Option<String>,
    comparable_salary: ComparableSalary,
    city: String,
    url: Url,
    created_date: NaiveDate,
    employer_url: Option<Url>,
}

impl VacancyRecord {
    /// Validate `fields` and build a record.
    pub fn new(fields: NewVacancy) -> Result<Self, VacancyError> {
        let name = fields.name.trim();
        if name.is_empty() {
            return Err(VacancyError::validation("name", "must not be empty"));
        }

        if let ComparableSalary::Range(lower, upper) = fields.comparable_salary {
            if lower > upper {
                return Err(VacancyError::validation(
                    "average_salary",
                    format!("lower bound {} exceeds upper bound {}", lower, upper),
                ));
            }
        }

        let url = parse_absolute_url("url", &fields.url)?;
        let employer_url = fields
            .employer_url
            .as_deref()
            .map(|raw| parse_absolute_url("employer_url", raw))
            .transpose()?;
        let created_date = parse_created_date(&fields.created_date)?;

        Ok(Self {
            name: name.to_string(),
            salary_text: fields.salary_text,
            comparable_salary: fields.comparable_salary,
            city: fields.city,
            url,
            created_date,
            employer_url,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn salary_text(&self) -> Option<&str> {
        self.salary_text.as_deref()
    }

    pub fn comparable_salary(&self) -> ComparableSalary {
        self.comparable_salary
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn url(&self) -> &Url {
        &self.url
    }

    pub fn created_date(&self) -> NaiveDate {
        self.created_date
    }

    pub fn employer_url(&self) -> Option<&Url> {
        self.employer_url.as_ref()
    }

    /// Compare two postings by salary alone.
    ///
    /// Fails when one record carries a single value and the other a range.
    pub fn compare(&self, other: &VacancyRecord) -> Result<Ordering, VacancyError> {
        self.comparable_salary.compare(&other.comparable_salary)
    }

    /// Salary-only equality; shares the shape check with [`compare`](Self::compare).
    pub fn salary_eq(&self, other: &VacancyRecord) -> Result<bool, VacancyError> {
        Ok(self.compare(other)? == Ordering::Equal)
    }

    /// Multi-line description shown to the user.
    pub fn details(&self) -> String {
        format!(
            "{}\nДата создания: {}\nСсылка на вакансию: {}\nГород: {}\nЗарплата: {}\nСсылка на работодателя: {}\n",
            self.name,
            self.created_date.format(DATE_FORMAT),
            self.url,
            self.city,
            self.salary_text.as_deref().unwrap_or("не указана"),
            self.employer_url
                .as_ref()
                .map(Url::as_str)
                .unwrap_or("не указана"),
        )
    }
}

impl fmt::Display for VacancyRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.salary_text {
            Some(salary) => write!(f, "{}, {}", self.name, salary),
            None => write!(f, "{}", self.name),
        }
    }
}

impl TryFrom<NewVacancy> for VacancyRecord {
    type Error = VacancyError;

    fn try_from(fields: NewVacancy) -> Result<Self, Self::Error> {
        Self::new(fields)
    }
}

fn parse_absolute_url(field: &'static str, raw: &str) -> Result<Url, VacancyError> {
    let url = Url::parse(raw.trim())
        .map_err(|e| VacancyError::validation(field, format!("'{}' is not a valid URL: {}", raw, e)))?;

    match url.scheme() {
        "http" | "https" if url.has_host() => Ok(url),
        _ => Err(VacancyError::validation(
            field,
            format!("'{}' is not an absolute http(s) URL", raw),
        )),
    }
}

/// Parse a posting date.
///
/// Accepts the persisted `DD.MM.YYYY` form, plain ISO dates, RFC 3339
/// timestamps and the search API's `+0300`-style offsets. Timestamps keep
/// the calendar date of their own offset.
pub fn parse_created_date(raw: &str) -> Result<NaiveDate, VacancyError> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, DATE_FORMAT) {
        return Ok(date);
    }
    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return Ok(date);
    }
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Ok(timestamp.date_naive());
    }
    DateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%z")
        .map(|timestamp| timestamp.date_naive())
        .map_err(|_| VacancyError::validation("created_date", format!("'{}' is not a calendar date", raw)))
}
