use crate::areas::ledger::LedgerStore;
use crate::artifacts::history::group_by_commit;
use colored::Colorize;

pub fn run(ledger: &impl LedgerStore) -> anyhow::Result<()> {
    let rows = ledger.read_rows()?;
    let commits = group_by_commit(&rows);

    if commits.is_empty() {
        println!("ledger is empty");
        return Ok(());
    }

    // newest last in the ledger, newest first on screen
    for commit in commits.iter().rev() {
        let short_hash = commit.hash.chars().take(8).collect::<String>();
        println!(
            "{} {} {}",
            short_hash.yellow(),
            commit.date.dimmed(),
            commit.author
        );
        println!("    {}", commit.message);
        for file in &commit.files {
            println!("      {}", file);
        }
    }

    Ok(())
}
