//! Command-Line Surface
//!
//! Active checks (`check-url`, `check-email`) and the passive `watch`
//! loop trigger scans; `history` and `clear` operate on the ledger.
//! Human output mirrors the badge/label wording users already know;
//! `--json` dumps the raw structures instead.

use std::path::PathBuf;

use anyhow::Context;
use chrono::Local;
use clap::{Parser, Subcommand, ValueEnum};

use crate::logic::analyze;
use crate::logic::classifier::ClassifierClient;
use crate::logic::history::{self, HistoryFilter, HistoryRecord};
use crate::logic::scoring::{Findings, Report, RiskBand};
use crate::logic::subject::{EmailSubject, Subject, UrlSubject};
use crate::logic::watch;

// ============================================================================
// ARGUMENTS
// ============================================================================

#[derive(Debug, Parser)]
#[command(name = "fraudshield", version, about = "URL & email phishing risk scoring agent")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Score a URL against the classifier service
    CheckUrl {
        /// Absolute http/https URL to score
        url: String,

        /// Print the raw report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Score an email; sender, subject and body are all required
    CheckEmail {
        #[arg(long)]
        sender: String,

        #[arg(long)]
        subject: String,

        /// Email body text
        #[arg(long, required_unless_present = "body_file", conflicts_with = "body_file")]
        body: Option<String>,

        /// Read the email body from a file instead
        #[arg(long)]
        body_file: Option<PathBuf>,

        /// Print the raw report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Show recorded check history
    History {
        /// Which records to show
        #[arg(long, value_enum, default_value_t = KindArg::All)]
        kind: KindArg,

        /// Print records as JSON
        #[arg(long)]
        json: bool,
    },

    /// Delete all recorded history
    Clear {
        /// Skip the confirmation step
        #[arg(long)]
        yes: bool,
    },

    /// Scan a stream of visited URLs read from stdin, one per line
    Watch,
}

/// History filter argument; `all` is the no-filter default
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    All,
    Url,
    Email,
}

impl KindArg {
    fn to_filter(self) -> HistoryFilter {
        match self {
            KindArg::All => HistoryFilter::All,
            KindArg::Url => HistoryFilter::Url,
            KindArg::Email => HistoryFilter::Email,
        }
    }
}

// ============================================================================
// DISPATCH
// ============================================================================

pub async fn run(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::CheckUrl { url, json } => check_url(&url, json).await,
        Command::CheckEmail {
            sender,
            subject,
            body,
            body_file,
            json,
        } => check_email(&sender, &subject, body, body_file, json).await,
        Command::History { kind, json } => show_history(kind, json),
        Command::Clear { yes } => clear_history(yes),
        Command::Watch => {
            watch::run(ClassifierClient::from_env()).await?;
            Ok(())
        }
    }
}

// ============================================================================
// ACTIVE CHECKS
// ============================================================================

async fn check_url(url: &str, json: bool) -> anyhow::Result<()> {
    let subject = Subject::Url(UrlSubject::parse(url)?);
    let client = ClassifierClient::from_env();

    // Never errors for URLs: classifier failures degrade to the
    // fallback report, and that outcome is recorded like any other
    let report = analyze::analyze(&client, &subject).await?;
    history::append(analyze::outcome_record(&subject, &report));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("URL check: {}", url);
        render_report(&report);
    }
    Ok(())
}

async fn check_email(
    sender: &str,
    subject_line: &str,
    body: Option<String>,
    body_file: Option<PathBuf>,
    json: bool,
) -> anyhow::Result<()> {
    let body_text = match (body, body_file) {
        (Some(text), _) => text,
        (None, Some(path)) => std::fs::read_to_string(&path)
            .with_context(|| format!("could not read body file {}", path.display()))?,
        (None, None) => anyhow::bail!("either --body or --body-file is required"),
    };

    let subject = Subject::Email(EmailSubject::new(sender, subject_line, &body_text)?);
    let client = ClassifierClient::from_env();

    // A transport failure surfaces here and skips the history append
    let report = analyze::analyze(&client, &subject)
        .await
        .context("Email analysis failed")?;
    history::append(analyze::outcome_record(&subject, &report));

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        println!("Email check: {} - {}", sender, subject_line);
        render_report(&report);
    }
    Ok(())
}

// ============================================================================
// HISTORY COMMANDS
// ============================================================================

fn show_history(kind: KindArg, json: bool) -> anyhow::Result<()> {
    let filter = kind.to_filter();
    let records = match filter {
        HistoryFilter::All => history::all(),
        _ => history::filter(filter),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&records)?);
        return Ok(());
    }

    if records.is_empty() {
        println!("No {} history found.", filter.as_str());
        return Ok(());
    }

    for record in &records {
        println!("{}", format_record_line(record));
    }
    println!("{} record(s).", records.len());
    Ok(())
}

fn clear_history(yes: bool) -> anyhow::Result<()> {
    if !yes {
        println!("This permanently deletes all recorded history.");
        println!("Re-run with --yes to confirm.");
        return Ok(());
    }

    history::clear();
    println!("History cleared.");
    Ok(())
}

// ============================================================================
// RENDERING
// ============================================================================

fn render_report(report: &Report) {
    let band = report.band();
    println!("  Status:      {} (score {}/100)", band.label(), report.safety_score);

    match &report.findings {
        Findings::Url(f) => {
            println!("  SSL:         {}", if f.ssl_valid { "Valid" } else { "Invalid" });
            println!("  Domain age:  {}", f.domain_age);
            println!(
                "  Blacklist:   {}",
                if f.blacklisted { "Blacklisted" } else { "Not Blacklisted" }
            );
            if f.suspicious_patterns.is_empty() {
                println!("  Patterns:    None");
            } else {
                println!("  Patterns:    {}", f.suspicious_patterns.join(", "));
            }
        }
        Findings::Email(f) => {
            println!(
                "  Sender:      {}",
                if f.sender_verified { "Verified" } else { "Unverified" }
            );
            println!("  Indicators:  {} detected", f.phishing_indicators.len());
            println!(
                "  Urgency:     {}",
                if f.urgency_tactics { "Detected" } else { "Not detected" }
            );
            println!("  Links:       {} found", f.suspicious_links.len());
        }
    }

    println!("  Advice:      {}", report.advice);
}

fn format_record_line(record: &HistoryRecord) -> String {
    let local_time = record.timestamp.with_timezone(&Local);
    format!(
        "{:<6} {}  {:>3}/100  {:<10} {}",
        record.kind.as_str().to_uppercase(),
        local_time.format("%Y-%m-%d %H:%M:%S"),
        record.result,
        RiskBand::from_score(record.result).label(),
        record.content
    )
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_arg_maps_to_filter() {
        assert_eq!(KindArg::All.to_filter(), HistoryFilter::All);
        assert_eq!(KindArg::Url.to_filter(), HistoryFilter::Url);
        assert_eq!(KindArg::Email.to_filter(), HistoryFilter::Email);
    }

    #[test]
    fn test_record_line_shows_kind_and_band() {
        let record = HistoryRecord::url("https://example.tk", 30);
        let line = format_record_line(&record);

        assert!(line.starts_with("URL"));
        assert!(line.contains("30/100"));
        assert!(line.contains("Dangerous"));
        assert!(line.contains("https://example.tk"));
    }
}
