use crate::areas::worktree::Worktree;

pub async fn run(worktree: &Worktree, paths: &[String]) -> anyhow::Result<()> {
    worktree.stage(paths).await?;
    println!("Staged {} path(s)", paths.len());
    Ok(())
}
