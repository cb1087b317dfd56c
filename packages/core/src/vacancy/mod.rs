//! Vacancy Module
//!
//! Salary normalization, the validated vacancy record, and the sources that
//! produce records from remote search APIs.

pub mod error;
pub mod hh_adapter;
pub mod provider;
pub mod record;
pub mod salary;

pub use error::{ProviderError, VacancyError};
pub use hh_adapter::HeadHunterSource;
pub use provider::{FetchedVacancies, VacancySource};
pub use record::{NewVacancy, VacancyRecord};
pub use salary::{normalize, ComparableSalary, NormalizedSalary};
