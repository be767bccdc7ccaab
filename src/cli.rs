use crate::commands;
use crate::commands::check::CheckOptions;
use crate::commands::evidence_summary::EvidenceSummaryOptions;
use crate::commands::incident_summary::IncidentSummaryOptions;
use crate::commands::message::MessageOptions;
use crate::commands::police_report::PoliceReportOptions;
use crate::commands::sms_link::SmsLinkOptions;
use anyhow::{Result, bail};
use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "t4j",
    version,
    about = "Document incidents, catalog evidence, and compile police reports."
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a cease-and-desist message.
    Message {
        /// calm, firm, severe, or very-harsh. Falls back to saved settings,
        /// then the configured default.
        #[arg(long)]
        tone: Option<String>,
        /// Free-form incident reference line to interpolate.
        #[arg(long, conflicts_with = "incident_id")]
        reference: Option<String>,
        /// Build the reference from this incident in the snapshot.
        #[arg(long, requires = "incidents")]
        incident_id: Option<u64>,
        /// Incident snapshot (JSON array).
        #[arg(long)]
        incidents: Option<PathBuf>,
        /// Saved user settings export (JSON).
        #[arg(long)]
        settings: Option<PathBuf>,
    },
    /// Render the evidence summary for a snapshot.
    EvidenceSummary {
        /// Evidence snapshot (JSON array).
        #[arg(long)]
        evidence: PathBuf,
        /// plain, formal, urgent, or urgent-feminine.
        #[arg(long)]
        tone: Option<String>,
    },
    /// Render the incident summary for a snapshot.
    IncidentSummary {
        /// Incident snapshot (JSON array).
        #[arg(long)]
        incidents: PathBuf,
    },
    /// Compile the full police report.
    PoliceReport {
        #[arg(long)]
        incidents: PathBuf,
        #[arg(long)]
        evidence: PathBuf,
        /// Evidence summary tone.
        #[arg(long)]
        tone: Option<String>,
        /// Department snapshot (JSON array).
        #[arg(long)]
        departments: Option<PathBuf>,
        /// Address the report to this department.
        #[arg(long, requires = "departments")]
        department_id: Option<u64>,
    },
    /// Build an sms: deep link carrying a message.
    SmsLink {
        #[arg(long)]
        message: String,
        /// Recipient phone number.
        #[arg(long)]
        to: Option<String>,
    },
    /// Print a random splash message and fallback image.
    Splash,
    /// Sanity-check record snapshots.
    Check {
        #[arg(long)]
        incidents: Option<PathBuf>,
        #[arg(long)]
        evidence: Option<PathBuf>,
        #[arg(long)]
        departments: Option<PathBuf>,
        /// Emit the report as JSON.
        #[arg(long)]
        json: bool,
    },
}

pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Message {
            tone,
            reference,
            incident_id,
            incidents,
            settings,
        } => {
            let opts = MessageOptions {
                tone,
                reference,
                incident_id,
                incidents_path: incidents,
                settings_path: settings,
            };
            println!("{}", commands::message::run(&opts)?);
        }
        Command::EvidenceSummary { evidence, tone } => {
            let opts = EvidenceSummaryOptions {
                evidence_path: evidence,
                tone,
            };
            print!("{}", commands::evidence_summary::run(&opts)?);
        }
        Command::IncidentSummary { incidents } => {
            let opts = IncidentSummaryOptions {
                incidents_path: incidents,
            };
            print!("{}", commands::incident_summary::run(&opts)?);
        }
        Command::PoliceReport {
            incidents,
            evidence,
            tone,
            departments,
            department_id,
        } => {
            let opts = PoliceReportOptions {
                incidents_path: incidents,
                evidence_path: evidence,
                tone,
                departments_path: departments,
                department_id,
            };
            print!("{}", commands::police_report::run(&opts)?);
        }
        Command::SmsLink { message, to } => {
            let opts = SmsLinkOptions {
                message,
                recipient: to,
            };
            println!("{}", commands::sms_link::run(&opts)?);
        }
        Command::Splash => {
            let output = commands::splash::run()?;
            if !output.is_empty() {
                println!("{output}");
            }
        }
        Command::Check {
            incidents,
            evidence,
            departments,
            json,
        } => {
            let opts = CheckOptions {
                incidents_path: incidents,
                evidence_path: evidence,
                departments_path: departments,
            };
            let report = commands::check::run(&opts)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                for detail in &report.details {
                    println!("{detail}");
                }
                for issue in &report.issues {
                    println!("issue: {issue}");
                }
            }
            if !report.ok {
                bail!("check found {} issue(s)", report.issues.len());
            }
        }
    }

    Ok(())
}
