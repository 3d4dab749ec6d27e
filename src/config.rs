use std::fmt::Display;

use url::Url;

/// The vacancy platforms we query.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Platform {
    HeadHunter,
    SuperJob,
}

impl Platform {
    /// The currency code the platform uses for local-currency salaries.
    pub fn local_currency(self) -> &'static str {
        match self {
            Self::HeadHunter => "RUR",
            Self::SuperJob => "rub",
        }
    }
}

impl Display for Platform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            Self::HeadHunter => "HeadHunter",
            Self::SuperJob => "SuperJob",
        })
    }
}

/// Which query parameter receives the per-language search term.
#[derive(Clone, Copy, Debug)]
pub enum SearchField {
    /// A bare `keyword` parameter.
    Keyword,
    /// A `text` parameter restricted to matching the vacancy name.
    Text,
}

/// Everything needed to search one platform, fixed at startup.
#[derive(Debug)]
pub struct PlatformQueryConfig {
    pub platform: Platform,
    pub base_url: Url,
    base_params: Vec<(String, String)>,
    search_field: SearchField,
    headers: Vec<(String, String)>,
}

impl PlatformQueryConfig {
    const HH_URL: &'static str = "https://api.hh.ru/vacancies";
    const SJ_URL: &'static str = "https://api.superjob.ru/2.0/vacancies/";

    /// Developer vacancies in Moscow published in the last 30 days.
    pub fn head_hunter() -> Self {
        Self {
            platform: Platform::HeadHunter,
            base_url: Url::parse(Self::HH_URL).unwrap(),
            base_params: params(&[
                ("professional_role", "96"),
                ("area", "1"),
                ("period", "30"),
                ("per_page", "100"),
            ]),
            search_field: SearchField::Text,
            headers: Vec::new(),
        }
    }

    /// Programming vacancies in Moscow published in the last 30 days.
    pub fn super_job(api_key: &str) -> Self {
        Self {
            platform: Platform::SuperJob,
            base_url: Url::parse(Self::SJ_URL).unwrap(),
            base_params: params(&[
                ("catalogues", "48"),
                ("t", "4"),
                ("period", "30"),
                ("count", "100"),
            ]),
            search_field: SearchField::Keyword,
            headers: vec![("X-Api-App-Id".to_string(), api_key.to_string())],
        }
    }

    /// The full query parameters for one page of one search term.
    pub fn page_params(&self, term: &str, page: u32) -> Vec<(String, String)> {
        let mut params = self.base_params.clone();
        params.push(match self.search_field {
            SearchField::Keyword => ("keyword".to_string(), term.to_string()),
            SearchField::Text => ("text".to_string(), format!("NAME:{term}")),
        });
        params.push(("page".to_string(), page.to_string()));
        params
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }
}

fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .collect()
}
