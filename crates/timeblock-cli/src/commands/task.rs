use std::error::Error;
use std::path::PathBuf;

use clap::Subcommand;
use timeblock_core::{Task, TaskCatalog};

use crate::plan_file::PlanFile;

#[derive(Subcommand)]
pub enum TaskAction {
    /// List tasks
    List {
        /// Plan file (JSON)
        #[arg(long)]
        file: PathBuf,
        /// Only unfinished tasks
        #[arg(long)]
        pending: bool,
        /// Filter by tag
        #[arg(long)]
        tag: Option<String>,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Summary statistics
    Summary {
        /// Plan file (JSON)
        #[arg(long)]
        file: PathBuf,
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// List distinct tags
    Tags {
        /// Plan file (JSON)
        #[arg(long)]
        file: PathBuf,
    },
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn Error>> {
    match action {
        TaskAction::List {
            file,
            pending,
            tag,
            json,
        } => {
            let catalog = load_catalog(&file)?;
            let selected: Vec<&Task> = catalog
                .tasks()
                .iter()
                .filter(|task| !pending || !task.done)
                .filter(|task| tag.as_deref().map_or(true, |t| task.tags.contains(t)))
                .collect();

            if json {
                println!("{}", serde_json::to_string_pretty(&selected)?);
            } else {
                for task in selected {
                    let check = if task.done { "x" } else { " " };
                    println!(
                        "[{check}] {}  ({} min, importance {})",
                        task.name, task.estimated_minutes, task.importance
                    );
                }
            }
        }
        TaskAction::Summary { file, json } => {
            let catalog = load_catalog(&file)?;
            let summary = catalog.summary(chrono::Local::now().naive_local());

            if json {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!(
                    "{} total, {} incomplete, {} completed, {} overdue",
                    summary.total, summary.incomplete, summary.completed, summary.overdue
                );
            }
        }
        TaskAction::Tags { file } => {
            let catalog = load_catalog(&file)?;
            for tag in catalog.all_tags() {
                println!("{tag}");
            }
        }
    }
    Ok(())
}

fn load_catalog(file: &PathBuf) -> Result<TaskCatalog, Box<dyn Error>> {
    let plan_file = PlanFile::load(file)?;
    Ok(TaskCatalog::from_tasks(plan_file.tasks))
}
