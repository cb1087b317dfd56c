use reqwest::Client;
use serde::Deserialize;

use crate::vacancy::error::ProviderError;

/// Largest page size the vacancy search endpoint accepts.
pub const MAX_PER_PAGE: u32 = 100;

#[derive(Clone)]
pub struct HeadHunterClient {
    base_url: String,
    http: Client,
}

impl HeadHunterClient {
    /// The search API rejects requests without a `User-Agent`.
    pub fn new(base_url: String, user_agent: &str) -> Result<Self, ProviderError> {
        let http = Client::builder()
            .user_agent(user_agent)
            .build()
            .map_err(|err| ProviderError::NetworkError {
                message: format!("Failed to build HTTP client: {}", err),
            })?;

        Ok(Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

/// Parameters of a vacancy search.
#[derive(Debug, Clone)]
pub struct SearchQuery {
    pub text: String,
    pub area: u32,
    pub per_page: u32,
}

impl SearchQuery {
    pub fn new(text: impl Into<String>, area: u32) -> Self {
        Self {
            text: text.into(),
            area,
            per_page: MAX_PER_PAGE,
        }
    }
}

/// One page of `GET /vacancies`.
#[derive(Debug, Deserialize)]
pub struct HhVacancyPage {
    #[serde(default)]
    pub found: u64,
    #[serde(default)]
    pub pages: u32,
    #[serde(default)]
    pub page: u32,
    #[serde(default)]
    pub items: Vec<HhVacancy>,
}

#[derive(Debug, Deserialize)]
pub struct HhVacancy {
    pub name: String,
    pub salary: Option<HhSalary>,
    pub area: HhArea,
    pub created_at: String,
    pub alternate_url: String,
    #[serde(default)]
    pub employer: Option<HhEmployer>,
}

#[derive(Debug, Deserialize)]
pub struct HhSalary {
    pub from: Option<i64>,
    pub to: Option<i64>,
    #[serde(default)]
    pub currency: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct HhArea {
    pub name: String,
}

#[derive(Debug, Deserialize)]
pub struct HhEmployer {
    #[serde(default)]
    pub alternate_url: Option<String>,
}

impl HeadHunterClient {
    /// Fetch a single page of vacancies that disclose a salary.
    pub async fn fetch_page(
        &self,
        query: &SearchQuery,
        page: u32,
    ) -> Result<HhVacancyPage, ProviderError> {
        let url = format!("{}/vacancies", self.base_url);
        let params = [
            ("text", query.text.clone()),
            ("only_with_salary", "true".to_string()),
            ("area", query.area.to_string()),
            ("page", page.to_string()),
            ("per_page", query.per_page.min(MAX_PER_PAGE).to_string()),
        ];

        let response = self
            .http
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(|err| ProviderError::NetworkError {
                message: format!("Failed to fetch vacancies page {}: {}", page, err),
            })?;

        if !response.status().is_success() {
            return Err(ProviderError::HttpStatus {
                status: response.status().as_u16(),
                url,
            });
        }

        response
            .json::<HhVacancyPage>()
            .await
            .map_err(|err| ProviderError::FormatError {
                message: format!("Failed to parse vacancies page {}: {}", page, err),
            })
    }
}
