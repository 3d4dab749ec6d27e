use crate::{
    collector::{collect, Fetch},
    config::PlatformQueryConfig,
    error::Result,
};

/// Aggregated salary statistics for one (platform, language) pair.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct LanguageStats {
    /// The platform-reported total match count.
    pub vacancies_found: u64,
    /// How many listings had a usable salary estimate.
    pub vacancies_processed: usize,
    /// The integer average over processed listings, 0 if none.
    pub average_salary: u64,
}

/// Collects salary statistics for each language, preserving input order.
///
/// Any collection failure aborts the whole platform run; no partial
/// results are returned.
pub fn aggregate(
    fetcher: &impl Fetch,
    languages: &[&str],
    config: &PlatformQueryConfig,
) -> Result<Vec<(String, LanguageStats)>> {
    let mut stats = Vec::with_capacity(languages.len());
    for &language in languages {
        let data = collect(fetcher, config, language)?;
        let processed = data.salaries.len();
        let average = if processed > 0 {
            data.salaries.iter().sum::<u64>() / processed as u64
        } else {
            0
        };
        log::info!(
            "[{}] {}: {} found, {} processed, {} average",
            config.platform,
            language,
            data.found,
            processed,
            average,
        );

        stats.push((
            language.to_string(),
            LanguageStats {
                vacancies_found: data.found,
                vacancies_processed: processed,
                average_salary: average,
            },
        ));
    }
    Ok(stats)
}

#[cfg(test)]
mod tests {
    use serde_json::{json, Value};
    use url::Url;

    use super::*;

    /// Answers every request with the same single terminal page.
    struct SinglePageFetcher {
        page: Value,
    }

    impl Fetch for SinglePageFetcher {
        fn fetch(
            &self,
            _url: &Url,
            _params: &[(String, String)],
            _headers: &[(String, String)],
        ) -> Result<Value> {
            Ok(self.page.clone())
        }
    }

    #[test]
    fn averages_processed_salaries() {
        let fetcher = SinglePageFetcher {
            page: json!({
                "items": [
                    { "salary": { "from": 100_000, "to": 200_000, "currency": "RUR" } },
                    { "salary": { "from": 90_000, "to": null, "currency": "RUR" } },
                    { "salary": null },
                ],
                "pages": 1,
                "found": 42,
            }),
        };
        let config = PlatformQueryConfig::head_hunter();

        let stats = aggregate(&fetcher, &["Python"], &config).unwrap();
        let (language, stat) = &stats[0];
        assert_eq!(language, "Python");
        // (150000 + 108000) / 2
        assert_eq!(
            stat,
            &LanguageStats {
                vacancies_found: 42,
                vacancies_processed: 2,
                average_salary: 129_000,
            },
        );
    }

    #[test]
    fn zero_processed_yields_zero_average() {
        let fetcher = SinglePageFetcher {
            page: json!({ "objects": [], "total": 7, "more": false }),
        };
        let config = PlatformQueryConfig::super_job("key");

        let stats = aggregate(&fetcher, &["Ruby"], &config).unwrap();
        assert_eq!(
            stats[0].1,
            LanguageStats {
                vacancies_found: 7,
                vacancies_processed: 0,
                average_salary: 0,
            },
        );
    }

    #[test]
    fn full_run_renders_one_row_per_language() {
        let languages = [
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
        let head_hunter = SinglePageFetcher {
            page: json!({
                "items": [
                    { "salary": { "from": 100_000, "to": 200_000, "currency": "RUR" } },
                ],
                "pages": 1,
                "found": 9,
            }),
        };
        let super_job = SinglePageFetcher {
            page: json!({
                "objects": [
                    { "payment_from": 80_000, "payment_to": 0, "currency": "rub" },
                ],
                "total": 4,
                "more": false,
            }),
        };

        for (fetcher, config, title) in [
            (
                &head_hunter,
                PlatformQueryConfig::head_hunter(),
                "HeadHunter Moscow",
            ),
            (
                &super_job,
                PlatformQueryConfig::super_job("key"),
                "SuperJob Moscow",
            ),
        ] {
            let stats = aggregate(fetcher, &languages, &config).unwrap();
            let table = crate::report::render(title, &stats);
            let cell_rows = table
                .lines()
                .filter(|line| line.starts_with("| "))
                .collect::<Vec<_>>();
            // One header row plus one row per language.
            assert_eq!(cell_rows.len(), 12, "{title}");
            for (row, language) in cell_rows[1..].iter().zip(languages) {
                assert!(row.starts_with(&format!("| {language} ")), "{row}");
            }
        }
    }

    #[test]
    fn preserves_language_order() {
        let fetcher = SinglePageFetcher {
            page: json!({ "items": [], "pages": 1, "found": 0 }),
        };
        let config = PlatformQueryConfig::head_hunter();
        let languages = ["TypeScript", "Go", "C#"];

        let stats = aggregate(&fetcher, &languages, &config).unwrap();
        let order = stats
            .iter()
            .map(|(language, _)| language.as_str())
            .collect::<Vec<_>>();
        assert_eq!(order, languages);
    }
}
