mod aggregator;
mod collector;
mod config;
mod error;
mod report;
mod salary;

pub use aggregator::{aggregate, LanguageStats};
pub use collector::{collect, Fetch, HttpFetcher, VacancyData};
pub use config::{Platform, PlatformQueryConfig, SearchField};
pub use error::{Error, Result};
pub use report::render;
pub use salary::{predict_salary, SalaryRange};

pub fn init_logger(default_level: log::LevelFilter) {
    pretty_env_logger::formatted_timed_builder()
        .filter_level(default_level)
        .parse_default_env()
        .init();
}
