use crate::areas::worktree::Worktree;
use colored::Colorize;

pub async fn run(worktree: &Worktree) -> anyhow::Result<()> {
    worktree.push().await?;
    println!("{}", "Pushed".green().bold());
    Ok(())
}
