use clap::Parser;
use job_salary_stats::{
    aggregate, init_logger, render, Error, HttpFetcher, PlatformQueryConfig, Result,
};

/// Fetches salary statistics for popular programming languages from the
/// HeadHunter and SuperJob vacancy platforms, covering Moscow vacancies
/// published in the last 30 days, and prints one summary table per
/// platform.
#[derive(Parser)]
#[command(version)]
struct Cli {}

const LANGUAGES: [&str; 11] = [
    "JavaScript",
    "Java",
    "Python",
    "Ruby",
    "PHP",
    "C++",
    "C#",
    "Go",
    "Scala",
    "Swift",
    "TypeScript",
];

const SJOB_KEY_VAR: &str = "SJOB_KEY";

fn main() -> Result<()> {
    Cli::parse();
    init_logger(log::LevelFilter::Info);

    // The API key must be present before any network activity starts.
    dotenvy::dotenv().ok();
    let sjob_key =
        std::env::var(SJOB_KEY_VAR).map_err(|_| Error::MissingEnv { name: SJOB_KEY_VAR })?;

    let fetcher = HttpFetcher::new();

    let config = PlatformQueryConfig::head_hunter();
    let stats = aggregate(&fetcher, &LANGUAGES, &config)?;
    println!("{}", render("HeadHunter Moscow", &stats));

    let config = PlatformQueryConfig::super_job(&sjob_key);
    let stats = aggregate(&fetcher, &LANGUAGES, &config)?;
    println!("{}", render("SuperJob Moscow", &stats));

    Ok(())
}
