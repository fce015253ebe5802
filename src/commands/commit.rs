use crate::areas::worktree::Worktree;
use colored::Colorize;

pub async fn run(worktree: &Worktree, message: &str) -> anyhow::Result<()> {
    let hash = worktree.commit(message).await?;
    println!("{} {}", "Committed".green().bold(), hash);
    Ok(())
}
