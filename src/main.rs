use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use gitledger::areas::hosting::InMemoryCommitSource;
use gitledger::areas::ledger::CsvLedger;
use gitledger::areas::worktree::Worktree;
use gitledger::commands;

#[derive(Parser)]
#[command(
    name = "gitledger",
    version = "0.1.0",
    about = "Browse working copy changes and mirror commit history into a ledger spreadsheet",
    long_about = "gitledger inspects local changes in a git working copy, stages, commits and \
    pushes them, and mirrors commit metadata (hash, message, author, date, changed files) \
    into an append-only CSV ledger. Reports over the ledger list synced commits and \
    de-duplicated per-file history.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
",
)]
struct Cli {
    #[arg(
        long,
        global = true,
        default_value = ".",
        help = "Path to the git working copy"
    )]
    repo: String,
    #[arg(
        long,
        global = true,
        default_value = "ledger.csv",
        help = "Path to the ledger CSV file"
    )]
    ledger: String,
    #[arg(
        long,
        global = true,
        help = "Repository label recorded with each row (defaults to the working copy directory name)"
    )]
    label: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    #[command(
        name = "status",
        about = "Show working copy changes as a file tree",
        long_about = "This command parses porcelain status output and renders the changed files \
        as a nested tree, with change-count badges on directories and added/deleted line \
        counts on files."
    )]
    Status,
    #[command(name = "stage", about = "Stage files for the next commit")]
    Stage {
        #[arg(required = true, help = "Paths to stage")]
        paths: Vec<String>,
    },
    #[command(name = "commit", about = "Create a commit with the specified message")]
    Commit {
        #[arg(short, long, help = "The commit message")]
        message: String,
    },
    #[command(name = "push", about = "Push the current branch")]
    Push,
    #[command(
        name = "sync",
        about = "Mirror recent commits into the ledger",
        long_about = "This command reads the newest commits from the working copy (or from a \
        JSON dump of a hosting service's commit payloads) and appends one ledger row per \
        changed file. Commits already present in the ledger are skipped."
    )]
    Sync {
        #[arg(
            short = 'n',
            long,
            default_value_t = 10,
            help = "How many recent commits to consider"
        )]
        count: usize,
        #[arg(
            long,
            help = "Read commits from a JSON file instead of the working copy"
        )]
        from_json: Option<String>,
    },
    #[command(name = "log", about = "List commits recorded in the ledger")]
    Log,
    #[command(
        name = "report",
        about = "Per-file history report over the ledger",
        long_about = "This command de-duplicates the ledger by (file, repository label) and \
        prints, for every file, how often it was touched and its first and last commit."
    )]
    Report,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let worktree = Worktree::new(&cli.repo);
    let mut ledger = CsvLedger::new(&cli.ledger);
    let label = cli.label.clone().unwrap_or_else(|| worktree.label());

    match &cli.command {
        Commands::Status => commands::status::run(&worktree).await?,
        Commands::Stage { paths } => commands::stage::run(&worktree, paths).await?,
        Commands::Commit { message } => commands::commit::run(&worktree, message).await?,
        Commands::Push => commands::push::run(&worktree).await?,
        Commands::Sync { count, from_json } => match from_json {
            Some(path) => {
                let payload = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read commit payload at {}", path))?;
                let source = InMemoryCommitSource::from_json(&payload)?;
                commands::sync::run(source, &mut ledger, label, *count).await?
            }
            None => commands::sync::run(worktree.clone(), &mut ledger, label, *count).await?,
        },
        Commands::Log => commands::log::run(&ledger)?,
        Commands::Report => commands::report::run(&ledger)?,
    }

    Ok(())
}
