use crate::{cli::OutputFormat, error::Result};
#[cfg(feature = "colored-output")]
use colored::*;
use media_links::{Classification, ClassifiedRecord, Induction};
use serde::Serialize;
use std::io::Write;

/// One classified URL without provenance.
#[derive(Debug, Serialize)]
pub struct UrlResult {
    pub url: String,
    #[serde(flatten)]
    pub induction: Induction,
}

/// A scan over text or records.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub extracted: usize,
    pub classified: usize,
    pub results: ScanResults,
    /// Recognized URLs left without a track type; only filled on request.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<UrlResult>,
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ScanResults {
    Urls(Vec<(Classification, String)>),
    Records(Vec<ClassifiedRecord>),
}

#[derive(Debug, Serialize)]
pub struct PlatformEntry {
    pub name: &'static str,
    pub stream_type: String,
}

pub struct OutputManager {
    colored: bool,
}

impl OutputManager {
    pub fn new(colored: bool) -> Self {
        Self { colored }
    }

    pub fn format_url_results(&self, results: &[UrlResult], format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                let mut output = String::new();
                for result in results {
                    let status = match result.induction {
                        Induction::Classified(c) => self.colorize(&c.to_string(), &Color::Green, true),
                        Induction::Unresolved { .. } => {
                            self.colorize(&result.induction.to_string(), &Color::Yellow, false)
                        }
                        Induction::Unrecognized => {
                            self.colorize("unclassified", &Color::Yellow, false)
                        }
                    };
                    output.push_str(&format!(
                        "{}  {}\n",
                        status,
                        self.colorize(&result.url, &Color::Blue, false)
                    ));
                }
                Ok(output)
            }
            OutputFormat::Json | OutputFormat::JsonCompact => self.format_json(results, format),
        }
    }

    pub fn format_scan_report(&self, report: &ScanReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                let mut output = String::new();
                output.push_str(&format!(
                    "{}: {}\n",
                    self.colorize("Total URLs extracted", &Color::Yellow, false),
                    report.extracted
                ));
                output.push_str(&format!(
                    "{}: {}\n",
                    self.colorize("After validation", &Color::Yellow, false),
                    report.classified
                ));
                match &report.results {
                    ScanResults::Urls(urls) => {
                        for (classification, url) in urls {
                            output.push_str(&format!(
                                "  {}  {}\n",
                                self.colorize(&classification.to_string(), &Color::Green, true),
                                self.colorize(url, &Color::Blue, false)
                            ));
                        }
                    }
                    ScanResults::Records(records) => {
                        for classified in records {
                            let record = &classified.record;
                            output.push_str(&format!(
                                "  {}  {}\n",
                                self.colorize(&classified.classification.to_string(), &Color::Green, true),
                                self.colorize(record.url(), &Color::Blue, false)
                            ));
                            output.push_str(&format!(
                                "    {}: {} (parent {}, {} upvotes, created {})\n",
                                self.colorize("Source", &Color::Cyan, false),
                                record.id(),
                                record.parent_id(),
                                record.upvotes(),
                                record.created_utc().format("%Y-%m-%d %H:%M:%S"),
                            ));
                            output.push_str(&format!(
                                "    {}: {}\n",
                                self.colorize("Title", &Color::Cyan, false),
                                Self::one_line(record.title())
                            ));
                        }
                    }
                }
                if !report.unresolved.is_empty() {
                    output.push_str(&format!(
                        "{}: {}\n",
                        self.colorize("Unresolved", &Color::Yellow, false),
                        report.unresolved.len()
                    ));
                    for result in &report.unresolved {
                        output.push_str(&format!(
                            "  {}  {}\n",
                            self.colorize(&result.induction.to_string(), &Color::Yellow, false),
                            self.colorize(&result.url, &Color::Blue, false)
                        ));
                    }
                }
                Ok(output)
            }
            OutputFormat::Json | OutputFormat::JsonCompact => self.format_json(report, format),
        }
    }

    pub fn format_platforms(&self, platforms: &[PlatformEntry], format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Pretty => {
                let mut output = String::new();
                output.push_str(&self.colorize("Supported platforms:", &Color::Green, true));
                output.push('\n');
                for (i, platform) in platforms.iter().enumerate() {
                    output.push_str(&format!(
                        "  {}. {} ({})\n",
                        i + 1,
                        self.colorize(platform.name, &Color::Cyan, false),
                        platform.stream_type
                    ));
                }
                Ok(output)
            }
            OutputFormat::Json | OutputFormat::JsonCompact => self.format_json(platforms, format),
        }
    }

    fn format_json<T: Serialize + ?Sized>(&self, value: &T, format: &OutputFormat) -> Result<String> {
        let mut json = if matches!(format, OutputFormat::JsonCompact) {
            serde_json::to_string(value)?
        } else {
            serde_json::to_string_pretty(value)?
        };
        json.push('\n');
        Ok(json)
    }

    fn one_line(text: &str) -> String {
        text.split_whitespace().collect::<Vec<_>>().join(" ")
    }

    fn colorize(&self, text: &str, color: &Color, bold: bool) -> String {
        #[cfg(feature = "colored-output")]
        {
            if self.colored {
                let colored_text = match color {
                    Color::Green => text.green(),
                    Color::Yellow => text.yellow(),
                    Color::Blue => text.blue(),
                    Color::Cyan => text.cyan(),
                };
                if bold {
                    colored_text.bold().to_string()
                } else {
                    colored_text.to_string()
                }
            } else {
                text.to_string()
            }
        }

        #[cfg(not(feature = "colored-output"))]
        {
            let _ = (self.colored, color, bold);
            text.to_string()
        }
    }
}

enum Color {
    Green,
    Yellow,
    Blue,
    Cyan,
}

pub fn write_output(content: &str) -> Result<()> {
    print!("{content}");
    std::io::stdout().flush()?;
    Ok(())
}
