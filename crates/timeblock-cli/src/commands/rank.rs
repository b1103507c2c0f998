use std::error::Error;
use std::path::PathBuf;

use chrono::NaiveDate;
use clap::Args;
use timeblock_core::{PriorityRanker, RankConfig, Task, TaskCatalog};

use crate::plan_file::PlanFile;

#[derive(Args)]
pub struct RankArgs {
    /// Plan file with tasks and profile (JSON)
    #[arg(long)]
    pub file: PathBuf,
    /// Reference date for scoring (defaults to today)
    #[arg(long)]
    pub today: Option<NaiveDate>,
    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

pub fn run(args: RankArgs) -> Result<(), Box<dyn Error>> {
    let plan_file = PlanFile::load(&args.file)?;
    let today = args
        .today
        .unwrap_or_else(|| chrono::Local::now().date_naive());
    let ranker = PriorityRanker::with_config(RankConfig {
        today,
        tie_break: plan_file.profile.tie_break.unwrap_or_default(),
    });

    let catalog = TaskCatalog::from_tasks(plan_file.tasks);
    let mut tasks: Vec<Task> = catalog.incomplete().into_iter().cloned().collect();
    ranker.sort_by_priority(&mut tasks);
    let scores = ranker.scores(&tasks);

    if args.json {
        let rows: Vec<_> = tasks
            .iter()
            .zip(&scores)
            .map(|(task, (_, score))| {
                serde_json::json!({
                    "id": task.id,
                    "name": task.name,
                    "score": score,
                })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
    } else {
        for (task, (_, score)) in tasks.iter().zip(&scores) {
            println!("{score:7.2}  {}", task.name);
        }
    }
    Ok(())
}
