use std::error::Error;
use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use clap::Subcommand;
use timeblock_core::{
    FixedEvent, Planner, PlannerConfig, Profile, RecordingObserver, TaskCatalog, WorkingWindow,
};

use crate::plan_file::PlanFile;

#[derive(Subcommand)]
pub enum PlanAction {
    /// Schedule a single day
    Day {
        /// Plan file with tasks, events and profile (JSON)
        #[arg(long)]
        file: PathBuf,
        /// Date to schedule (YYYY-MM-DD)
        #[arg(long)]
        date: NaiveDate,
        /// Planner configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Print placement counters
        #[arg(long)]
        verbose: bool,
    },
    /// Schedule a week
    Week {
        /// Plan file with tasks, events and profile (JSON)
        #[arg(long)]
        file: PathBuf,
        /// First day of the week (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,
        /// Planner configuration file (TOML)
        #[arg(long)]
        config: Option<PathBuf>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
        /// Print placement counters
        #[arg(long)]
        verbose: bool,
    },
}

pub fn run(action: PlanAction) -> Result<(), Box<dyn Error>> {
    match action {
        PlanAction::Day {
            file,
            date,
            config,
            json,
            verbose,
        } => {
            let inputs = Inputs::assemble(&file, config.as_deref())?;
            let mut observer = RecordingObserver::new();
            let plan = inputs.planner.plan_day_with(
                date,
                inputs.window,
                &inputs.catalog,
                &inputs.events,
                &mut observer,
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                for entry in &plan.entries {
                    println!("{entry}");
                }
                println!(
                    "effective focus minutes: {:.0}",
                    plan.weighted_focus_minutes(&inputs.profile.productivity)
                );
                for miss in &plan.unscheduled {
                    eprintln!(
                        "warning: could not fully schedule '{}': {} min remaining",
                        miss.name, miss.minutes
                    );
                }
            }
            if verbose {
                print_events(&observer)?;
            }
        }
        PlanAction::Week {
            file,
            start,
            config,
            json,
            verbose,
        } => {
            let inputs = Inputs::assemble(&file, config.as_deref())?;
            let mut observer = RecordingObserver::new();
            let plan = inputs.planner.plan_week_with(
                start,
                inputs.window,
                &inputs.catalog,
                &inputs.events,
                &mut observer,
            )?;

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                for (date, entries) in plan.entries_by_date() {
                    println!("== {date} ==");
                    for entry in entries {
                        println!("  {entry}");
                    }
                }
                println!(
                    "effective focus minutes: {:.0}",
                    plan.weighted_focus_minutes(&inputs.profile.productivity)
                );
                for miss in &plan.unscheduled {
                    eprintln!(
                        "warning: could not fully schedule '{}': {} min remaining",
                        miss.name, miss.minutes
                    );
                }
            }
            if verbose {
                print_events(&observer)?;
            }
        }
    }
    Ok(())
}

/// Everything a run needs, assembled from the plan file and an optional
/// configuration file. Profile preferences override configuration defaults.
struct Inputs {
    planner: Planner,
    window: WorkingWindow,
    catalog: TaskCatalog,
    events: Vec<FixedEvent>,
    profile: Profile,
}

impl Inputs {
    fn assemble(file: &Path, config_path: Option<&Path>) -> Result<Self, Box<dyn Error>> {
        let plan_file = PlanFile::load(file)?;
        let mut config = match config_path {
            Some(path) => PlannerConfig::from_toml_str(&fs::read_to_string(path)?)?,
            None => PlannerConfig::default(),
        };

        if let Some(rule) = plan_file.profile.tie_break {
            config.tie_break = rule;
        }
        let window = plan_file.profile.window.unwrap_or(config.default_window);

        Ok(Self {
            planner: Planner::with_config(config),
            window,
            catalog: TaskCatalog::from_tasks(plan_file.tasks),
            events: plan_file.events,
            profile: plan_file.profile,
        })
    }
}

fn print_events(observer: &RecordingObserver) -> Result<(), Box<dyn Error>> {
    for event in &observer.events {
        println!("{}", serde_json::to_string(event)?);
    }
    Ok(())
}
