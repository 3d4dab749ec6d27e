use serde::Deserialize;
use tiny_bail::prelude::*;
use url::Url;

use crate::{
    config::{Platform, PlatformQueryConfig},
    error::Result,
    salary::{predict_salary, SalaryRange},
};

/// The outcome of paginating through one search query.
#[derive(Default, PartialEq, Eq, Debug)]
pub struct VacancyData {
    /// One point estimate per listing with usable salary data.
    pub salaries: Vec<u64>,
    /// The platform-reported total match count.
    pub found: u64,
}

/// Fetches one page of search results as JSON.
pub trait Fetch {
    fn fetch(
        &self,
        url: &Url,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<serde_json::Value>;
}

/// A blocking HTTP fetcher. Any non-2xx status is an error.
#[derive(Default)]
pub struct HttpFetcher {
    client: reqwest::blocking::Client,
}

impl HttpFetcher {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Fetch for HttpFetcher {
    fn fetch(
        &self,
        url: &Url,
        params: &[(String, String)],
        headers: &[(String, String)],
    ) -> Result<serde_json::Value> {
        let mut request = self.client.get(url.clone()).query(params);
        for (name, value) in headers {
            request = request.header(name, value);
        }
        Ok(request.send()?.error_for_status()?.json()?)
    }
}

/// Pages through one search term and collects local-currency salary
/// estimates plus the platform's total match count.
pub fn collect(
    fetcher: &impl Fetch,
    config: &PlatformQueryConfig,
    term: &str,
) -> Result<VacancyData> {
    match config.platform {
        Platform::HeadHunter => collect_head_hunter(fetcher, config, term),
        Platform::SuperJob => collect_super_job(fetcher, config, term),
    }
}

fn collect_head_hunter(
    fetcher: &impl Fetch,
    config: &PlatformQueryConfig,
    term: &str,
) -> Result<VacancyData> {
    let mut data = VacancyData::default();
    for page in 0u32.. {
        let params = config.page_params(term, page);
        let body = fetcher.fetch(&config.base_url, &params, config.headers())?;
        let payload: HhPage = serde_json::from_value(body)?;
        log::debug!(
            "[{}] \"{}\" page {}: {} listings",
            config.platform,
            term,
            page,
            payload.items.len(),
        );

        for listing in &payload.items {
            data.salaries.push(cq!(listing.local_estimate()));
        }

        // The page count arrives on every page; the last page is inclusive.
        if page + 1 >= payload.pages {
            data.found = payload.found;
            break;
        }
    }
    Ok(data)
}

fn collect_super_job(
    fetcher: &impl Fetch,
    config: &PlatformQueryConfig,
    term: &str,
) -> Result<VacancyData> {
    let mut data = VacancyData::default();
    for page in 0u32.. {
        let params = config.page_params(term, page);
        let body = fetcher.fetch(&config.base_url, &params, config.headers())?;
        let payload: SjPage = serde_json::from_value(body)?;
        log::debug!(
            "[{}] \"{}\" page {}: {} listings",
            config.platform,
            term,
            page,
            payload.objects.len(),
        );

        for listing in &payload.objects {
            data.salaries.push(cq!(listing.local_estimate()));
        }

        // `total` is reported per page and accumulated into the found count.
        data.found += payload.total;
        if !payload.more {
            break;
        }
    }
    Ok(data)
}

/// One page of HeadHunter search results.
#[derive(Deserialize, Debug)]
struct HhPage {
    items: Vec<HhVacancy>,
    pages: u32,
    found: u64,
}

#[derive(Deserialize, Debug)]
struct HhVacancy {
    salary: Option<SalaryRange>,
}

impl HhVacancy {
    /// The point estimate, unless the salary is absent or in a foreign
    /// currency.
    fn local_estimate(&self) -> Option<u64> {
        let salary = self.salary.as_ref()?;
        if salary.currency.as_deref() != Some(Platform::HeadHunter.local_currency()) {
            return None;
        }
        salary.estimate()
    }
}

/// One page of SuperJob search results.
#[derive(Deserialize, Debug)]
struct SjPage {
    objects: Vec<SjVacancy>,
    total: u64,
    more: bool,
}

#[derive(Deserialize, Debug)]
struct SjVacancy {
    #[serde(default)]
    payment_from: f64,
    #[serde(default)]
    payment_to: f64,
    #[serde(default)]
    currency: String,
}

impl SjVacancy {
    /// The point estimate, unless the currency is foreign or both payment
    /// bounds are zero.
    fn local_estimate(&self) -> Option<u64> {
        if self.currency != Platform::SuperJob.local_currency() {
            return None;
        }
        if self.payment_from == 0.0 && self.payment_to == 0.0 {
            return None;
        }
        predict_salary(Some(self.payment_from), Some(self.payment_to))
    }
}
