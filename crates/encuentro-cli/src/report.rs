//! # Report Subcommand
//!
//! Produces the financial and demographic report for the active event:
//! rollups, goal progress, the dense daily submission series, and weekly
//! growth. This is the demand-pull path the dashboards poll; the CLI runs
//! it once per invocation.

use std::path::PathBuf;

use anyhow::Result;
use chrono::{NaiveDate, Utc};
use clap::{Args, ValueEnum};
use serde::Serialize;

use encuentro_stats::{
    aggregate, daily_series, weekly_growth, DailyBucket, GoalProgress, LookbackWindow,
    RegistrationStats, StatsFilter,
};

use crate::dataset::Dataset;

/// Lookback window selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum WindowArg {
    /// The trailing 7 days.
    #[value(name = "7")]
    Days7,
    /// The trailing 30 days.
    #[value(name = "30")]
    Days30,
    /// The trailing 90 days.
    #[value(name = "90")]
    Days90,
    /// From the earliest registration onward.
    All,
}

impl From<WindowArg> for LookbackWindow {
    fn from(arg: WindowArg) -> Self {
        match arg {
            WindowArg::Days7 => LookbackWindow::Days7,
            WindowArg::Days30 => LookbackWindow::Days30,
            WindowArg::Days90 => LookbackWindow::Days90,
            WindowArg::All => LookbackWindow::All,
        }
    }
}

/// Arguments for the `encuentro report` subcommand.
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Path to the dataset file.
    #[arg(long)]
    pub dataset: PathBuf,

    /// Lookback window for the daily series.
    #[arg(long, value_enum, default_value = "all")]
    pub window: WindowArg,

    /// Report date (defaults to today, UTC).
    #[arg(long)]
    pub today: Option<NaiveDate>,
}

#[derive(Debug, Serialize)]
struct ReportOutput {
    event: String,
    window: LookbackWindow,
    stats: RegistrationStats,
    goal: GoalProgress,
    weekly_growth_percent: f64,
    daily: Vec<DailyBucket>,
}

/// Execute the report subcommand.
pub fn run_report(args: &ReportArgs) -> Result<u8> {
    let dataset = Dataset::load(&args.dataset)?;

    let event = match dataset.directory.active_event() {
        Some(event) => event.clone(),
        None => {
            println!("No active context: no active event");
            return Ok(1);
        }
    };

    let registrations = dataset.registrations_for(event.id);
    let today = args.today.unwrap_or_else(|| Utc::now().date_naive());
    let window = LookbackWindow::from(args.window);

    let stats = aggregate(&registrations, &StatsFilter::all());
    let goal = GoalProgress::measure(
        stats.collected,
        stats.pending_projected,
        event.fundraising_goal,
    );
    let growth = weekly_growth(&registrations, today);
    let daily = daily_series(&registrations, window, today);

    println!(
        "Report for \"{}\" — {} registration(s), {:.1}% of goal collected",
        event.name, stats.total_count, goal.percent
    );

    let output = ReportOutput {
        event: event.name,
        window,
        stats,
        goal,
        weekly_growth_percent: growth,
        daily,
    };
    println!("{}", serde_json::to_string_pretty(&output)?);

    Ok(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use encuentro_core::{
        Event, EventId, JurisdictionId, Money, RegistrantDetails, Registration, RoleId,
    };

    fn sample_registration(event_id: EventId, day: NaiveDate) -> Registration {
        Registration::new(
            event_id,
            JurisdictionId::new(),
            RoleId::new(),
            RegistrantDetails {
                first_name: "Clara".to_string(),
                last_name: "Niño".to_string(),
                document: "1018432765".to_string(),
                email: "clara@example.org".to_string(),
            },
            false,
            Money::from_major(100_000),
        )
        .with_created_at(Utc.from_utc_datetime(&day.and_hms_opt(9, 0, 0).unwrap()))
    }

    #[test]
    fn report_for_active_event() {
        let mut dataset = Dataset::default();
        let event = Event::new(
            "Encuentro Nacional",
            Money::from_major(1_000_000),
            NaiveDate::from_ymd_opt(2026, 7, 1).unwrap(),
        )
        .unwrap();
        let event_id = event.id;
        dataset.directory.insert_event(event).unwrap();
        dataset.directory.activate(event_id).unwrap();
        dataset.registrations.push(sample_registration(
            event_id,
            NaiveDate::from_ymd_opt(2026, 5, 18).unwrap(),
        ));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        dataset.save(&path).unwrap();

        let code = run_report(&ReportArgs {
            dataset: path,
            window: WindowArg::Days7,
            today: NaiveDate::from_ymd_opt(2026, 5, 20),
        })
        .unwrap();
        assert_eq!(code, 0);
    }

    #[test]
    fn report_without_active_event_reports_no_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dataset.json");
        Dataset::default().save(&path).unwrap();

        let code = run_report(&ReportArgs {
            dataset: path,
            window: WindowArg::All,
            today: None,
        })
        .unwrap();
        assert_eq!(code, 1);
    }
}
