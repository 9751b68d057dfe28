use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use media_links::resolver::{NoopResolver, RedirectResolver};
use media_links::validator::default_resolver;
use media_links::{
    ClassifiedRecord, Induction, TextFragment, UrlRecord, ValidatorRegistry, extract_urls,
};
use tracing::{debug, info};

use crate::config::AppConfig;
use crate::error::Result;
use crate::output::{
    OutputManager, PlatformEntry, ScanReport, ScanResults, UrlResult, write_output,
};

pub struct CommandExecutor {
    config: AppConfig,
    registry: ValidatorRegistry,
    output: OutputManager,
}

impl CommandExecutor {
    pub fn new(config: AppConfig, offline: bool) -> Result<Self> {
        let resolver: Arc<dyn RedirectResolver> = if offline {
            debug!("Offline mode, redirects will not be resolved");
            Arc::new(NoopResolver)
        } else {
            default_resolver(&config.resolver_config())?
        };

        Ok(Self {
            config,
            registry: ValidatorRegistry::with_defaults(resolver),
            output: OutputManager::new(std::io::IsTerminal::is_terminal(&std::io::stdout())),
        })
    }

    pub async fn classify_urls(&self, urls: &[String]) -> Result<()> {
        let mut results = Vec::with_capacity(urls.len());
        for url in urls {
            let induction = self.registry.dispatch(url.as_str()).await;
            results.push(UrlResult {
                url: url.clone(),
                induction,
            });
        }
        let content = self.output.format_url_results(&results, &self.config.output)?;
        write_output(&content)
    }

    pub async fn scan(
        &self,
        input: Option<&Path>,
        records: bool,
        show_unresolved: bool,
    ) -> Result<()> {
        let text = read_input(input)?;

        let report = if records {
            let fragments: Vec<TextFragment> = serde_json::from_str(&text)?;
            let records: Vec<_> = fragments.iter().flat_map(TextFragment::url_records).collect();
            info!(fragments = fragments.len(), urls = records.len(), "Extracted URLs from records");
            let outcomes = self
                .registry
                .dispatch_records(records, self.config.concurrency)
                .await;
            records_report(outcomes, show_unresolved)
        } else {
            info!(urls = extract_urls(&text).count(), "Extracted URLs from text");
            let outcomes = self
                .registry
                .dispatch_text(&text, self.config.concurrency)
                .await;
            text_report(outcomes, show_unresolved)
        };

        info!(
            extracted = report.extracted,
            classified = report.classified,
            unresolved = report.unresolved.len(),
            "Scan finished"
        );
        let content = self.output.format_scan_report(&report, &self.config.output)?;
        write_output(&content)
    }

    pub fn list_platforms(&self) -> Result<()> {
        let platforms: Vec<_> = self
            .registry
            .validators()
            .iter()
            .map(|v| PlatformEntry {
                name: v.name(),
                stream_type: v.stream_type().to_string(),
            })
            .collect();
        let content = self.output.format_platforms(&platforms, &self.config.output)?;
        write_output(&content)
    }
}

fn read_input(input: Option<&Path>) -> Result<String> {
    match input {
        Some(path) => Ok(std::fs::read_to_string(path)?),
        None => {
            let mut buffer = String::new();
            std::io::stdin().read_to_string(&mut buffer)?;
            Ok(buffer)
        }
    }
}

fn text_report(outcomes: Vec<(Induction, String)>, show_unresolved: bool) -> ScanReport {
    let extracted = outcomes.len();
    let mut classified = Vec::new();
    let mut unresolved = Vec::new();
    for (induction, url) in outcomes {
        match induction {
            Induction::Classified(classification) => classified.push((classification, url)),
            Induction::Unresolved { .. } if show_unresolved => {
                unresolved.push(UrlResult { url, induction })
            }
            _ => {}
        }
    }
    ScanReport {
        extracted,
        classified: classified.len(),
        results: ScanResults::Urls(classified),
        unresolved,
    }
}

fn records_report(outcomes: Vec<(Induction, UrlRecord)>, show_unresolved: bool) -> ScanReport {
    let extracted = outcomes.len();
    let mut classified = Vec::new();
    let mut unresolved = Vec::new();
    for (induction, record) in outcomes {
        match induction {
            Induction::Classified(classification) => classified.push(ClassifiedRecord {
                classification,
                record,
            }),
            Induction::Unresolved { .. } if show_unresolved => unresolved.push(UrlResult {
                url: record.url().to_owned(),
                induction,
            }),
            _ => {}
        }
    }
    ScanReport {
        extracted,
        classified: classified.len(),
        results: ScanResults::Records(classified),
        unresolved,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use media_links::resolver::StaticResolver;
    use media_links::{StreamType, TrackType};

    const TEXT: &str = "see https://youtu.be/broken and https://youtube.com/watch?v=abc \
                        or https://example.com/page";

    fn registry() -> ValidatorRegistry {
        ValidatorRegistry::with_defaults(Arc::new(StaticResolver::new()))
    }

    #[tokio::test]
    async fn test_text_scan_drops_unresolved_by_default() {
        let outcomes = registry().dispatch_text(TEXT, 2).await;
        let report = text_report(outcomes, false);

        assert_eq!(report.extracted, 3);
        assert_eq!(report.classified, 1);
        assert!(report.unresolved.is_empty());
    }

    #[tokio::test]
    async fn test_text_scan_keeps_unresolved_when_asked() {
        let outcomes = registry().dispatch_text(TEXT, 2).await;
        let report = text_report(outcomes, true);

        assert_eq!(report.classified, 1);
        match &report.results {
            ScanResults::Urls(urls) => assert_eq!(
                urls[0].0,
                media_links::Classification::new(StreamType::YouTube, TrackType::Single)
            ),
            ScanResults::Records(_) => panic!("expected URL results"),
        }
        assert_eq!(report.unresolved.len(), 1);
        assert_eq!(report.unresolved[0].url, "https://youtu.be/broken");
        assert_eq!(
            report.unresolved[0].induction,
            Induction::unresolved(StreamType::YouTube)
        );
    }

    #[tokio::test]
    async fn test_record_scan_keeps_unresolved_when_asked() {
        let fragment: TextFragment = serde_json::from_value(serde_json::json!({
            "id": "c1",
            "parent_id": "t3_post",
            "kind": "comment",
            "body": "short link https://youtu.be/broken here",
            "upvotes": 4,
            "created_utc": "2024-05-01T12:00:00Z",
        }))
        .unwrap();
        let outcomes = registry()
            .dispatch_records(fragment.url_records(), 1)
            .await;

        let report = records_report(outcomes.clone(), true);
        assert_eq!(report.extracted, 1);
        assert_eq!(report.classified, 0);
        assert_eq!(report.unresolved[0].url, "https://youtu.be/broken");

        assert!(records_report(outcomes, false).unresolved.is_empty());
    }
}
