//! Output formatters for ranking reports

use crate::config::OutputFormat;
use crate::error::Result;
use crate::output::report::{MatchStrength, RankingReport};
use crate::processing::records::RankingResult;
use colored::{Color, Colorize};
use std::path::Path;

/// Trait for formatting ranking reports
pub trait OutputFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String>;
    fn supports_format(&self) -> OutputFormat;
}

/// Console formatter with optional colors
pub struct ConsoleFormatter {
    use_colors: bool,
    detailed: bool,
}

/// JSON formatter for API integration and structured data
pub struct JsonFormatter {
    pretty: bool,
}

/// Markdown formatter for sharing results
pub struct MarkdownFormatter {
    include_metadata: bool,
}

/// Report generator that coordinates different formatters
pub struct ReportGenerator {
    console_formatter: ConsoleFormatter,
    json_formatter: JsonFormatter,
    markdown_formatter: MarkdownFormatter,
}

impl ConsoleFormatter {
    pub fn new(use_colors: bool, detailed: bool) -> Self {
        Self { use_colors, detailed }
    }

    fn colorize(&self, text: &str, color: Color) -> String {
        if self.use_colors {
            text.color(color).to_string()
        } else {
            text.to_string()
        }
    }

    fn format_header(&self, title: &str, level: u8) -> String {
        let prefix = match level {
            1 => "█",
            2 => "▓",
            _ => "░",
        };

        let color = match level {
            1 => Color::Blue,
            2 => Color::Green,
            _ => Color::White,
        };

        if self.use_colors {
            format!("\n{} {}\n", prefix.color(color).bold(), title.color(color).bold())
        } else {
            format!("\n{} {}\n", prefix, title)
        }
    }

    fn format_strength_badge(&self, final_score: f64) -> String {
        let strength = MatchStrength::from_score(final_score);
        let color = match strength {
            MatchStrength::Strong => Color::Green,
            MatchStrength::Moderate => Color::Yellow,
            MatchStrength::Weak => Color::BrightYellow,
            MatchStrength::NoMatch => Color::BrightBlack,
        };

        if self.use_colors {
            format!("[{}]", strength.label().color(color).bold())
        } else {
            format!("[{}]", strength.label())
        }
    }

    fn format_result(&self, rank: usize, result: &RankingResult) -> String {
        let posting = &result.posting;
        let mut output = format!(
            "{:>2}. {} {} {}\n",
            rank,
            self.colorize(&format!("{:.3}", result.final_score), Color::Cyan),
            posting.title,
            self.format_strength_badge(result.final_score)
        );

        if !posting.organization.is_empty() || !posting.location.is_empty() {
            output.push_str(&format!("    {} · {}\n", posting.organization, posting.location));
        }

        if self.detailed {
            output.push_str(&format!(
                "    cosine {:.3} | vsps {:.3} | trust {:.3}\n",
                result.cosine_similarity, result.vsps, result.trust_score
            ));
            match posting.recruiter_rating {
                Some(rating) => output.push_str(&format!("    recruiter rating {:.1}/5\n", rating)),
                None => output.push_str("    no recruiter rating\n"),
            }
            if !posting.required_skills.is_empty() {
                output.push_str(&format!("    skills: {}\n", posting.required_skills.join(", ")));
            }
        }

        output
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&self.format_header("POSTING RANKING", 1));
        output.push_str(&format!(
            "Generated: {} | Processing time: {}ms\n",
            report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
            report.metadata.processing_time_ms
        ));
        output.push_str(&format!(
            "Candidate: {} ({})\n",
            report.metadata.candidate_name, report.metadata.candidate_id
        ));

        output.push_str(&self.format_header("Results", 2));
        if report.results.is_empty() {
            output.push_str(&self.colorize("No postings to rank.\n", Color::Yellow));
            return Ok(output);
        }

        for (i, result) in report.results.iter().enumerate() {
            output.push_str(&self.format_result(i + 1, result));
        }

        output.push_str(&format!(
            "\n{} of {} postings matched\n",
            report.matched_count(),
            report.metadata.posting_count
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Console
    }
}

impl JsonFormatter {
    pub fn new(pretty: bool) -> Self {
        Self { pretty }
    }
}

impl OutputFormatter for JsonFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        if self.pretty {
            Ok(serde_json::to_string_pretty(report)?)
        } else {
            Ok(serde_json::to_string(report)?)
        }
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Json
    }
}

impl MarkdownFormatter {
    pub fn new(include_metadata: bool) -> Self {
        Self { include_metadata }
    }

    fn markdown_strength_badge(final_score: f64) -> &'static str {
        match MatchStrength::from_score(final_score) {
            MatchStrength::Strong => "🟢 Strong",
            MatchStrength::Moderate => "🟡 Moderate",
            MatchStrength::Weak => "🟠 Weak",
            MatchStrength::NoMatch => "⚪ No match",
        }
    }

    fn escape_cell(text: &str) -> String {
        text.replace('|', "\\|")
    }
}

impl OutputFormatter for MarkdownFormatter {
    fn format_report(&self, report: &RankingReport) -> Result<String> {
        let mut output = String::new();

        output.push_str(&format!("# Posting ranking for {}\n\n", report.metadata.candidate_name));

        if self.include_metadata {
            output.push_str(&format!(
                "**Generated:** {} | **Processing Time:** {}ms | **Version:** {}\n\n",
                report.metadata.generated_at.format("%Y-%m-%d %H:%M:%S UTC"),
                report.metadata.processing_time_ms,
                report.metadata.ranker_version
            ));
        }

        if report.results.is_empty() {
            output.push_str("_No postings to rank._\n");
            return Ok(output);
        }

        output.push_str("| # | Posting | Organization | Final | Cosine | VSPS | Trust | Match |\n");
        output.push_str("|---|---------|--------------|-------|--------|------|-------|-------|\n");

        for (i, result) in report.results.iter().enumerate() {
            output.push_str(&format!(
                "| {} | {} | {} | {:.3} | {:.3} | {:.3} | {:.3} | {} |\n",
                i + 1,
                Self::escape_cell(&result.posting.title),
                Self::escape_cell(&result.posting.organization),
                result.final_score,
                result.cosine_similarity,
                result.vsps,
                result.trust_score,
                Self::markdown_strength_badge(result.final_score)
            ));
        }

        output.push_str(&format!(
            "\n{} of {} postings matched.\n",
            report.matched_count(),
            report.metadata.posting_count
        ));

        Ok(output)
    }

    fn supports_format(&self) -> OutputFormat {
        OutputFormat::Markdown
    }
}

impl ReportGenerator {
    pub fn new() -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(true, false),
            json_formatter: JsonFormatter::new(true),
            markdown_formatter: MarkdownFormatter::new(true),
        }
    }

    pub fn with_options(use_colors: bool, detailed: bool, pretty_json: bool, include_metadata: bool) -> Self {
        Self {
            console_formatter: ConsoleFormatter::new(use_colors, detailed),
            json_formatter: JsonFormatter::new(pretty_json),
            markdown_formatter: MarkdownFormatter::new(include_metadata),
        }
    }

    pub fn generate_report(&self, report: &RankingReport, format: &OutputFormat) -> Result<String> {
        match format {
            OutputFormat::Console => self.console_formatter.format_report(report),
            OutputFormat::Json => self.json_formatter.format_report(report),
            OutputFormat::Markdown => self.markdown_formatter.format_report(report),
        }
    }
}

impl Default for ReportGenerator {
    fn default() -> Self {
        Self::new()
    }
}

pub fn save_report_to_file(content: &str, file_path: &Path) -> Result<()> {
    use std::fs;
    if let Some(parent) = file_path.parent() {
        fs::create_dir_all(parent)?;
    }
    fs::write(file_path, content)?;
    Ok(())
}

pub fn suggest_filename(format: &OutputFormat, candidate_id: &str, timestamp: bool) -> String {
    let base_name: String = candidate_id
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '-' { c } else { '_' })
        .collect();

    let timestamp_suffix = if timestamp {
        format!("_{}", chrono::Utc::now().format("%Y%m%d_%H%M%S"))
    } else {
        String::new()
    };

    match format {
        OutputFormat::Console => format!("{}_ranking{}.txt", base_name, timestamp_suffix),
        OutputFormat::Json => format!("{}_ranking{}.json", base_name, timestamp_suffix),
        OutputFormat::Markdown => format!("{}_ranking{}.md", base_name, timestamp_suffix),
    }
}
