use crate::areas::ledger::LedgerStore;
use crate::artifacts::history::unique_files;
use colored::Colorize;

pub fn run(ledger: &impl LedgerStore) -> anyhow::Result<()> {
    let rows = ledger.read_rows()?;
    let records = unique_files(&rows);

    if records.is_empty() {
        println!("ledger is empty");
        return Ok(());
    }

    for record in &records {
        let short_hash = record.last_commit_hash.chars().take(8).collect::<String>();
        println!(
            "{} {} {} {}",
            record.repository_label.blue(),
            record.file,
            format!("x{}", record.commit_count).bold(),
            format!("{} .. {}", record.first_commit_date, record.last_commit_date).dimmed()
        );
        println!(
            "    last: {} {} ({})",
            short_hash.yellow(),
            record.last_commit_message,
            record.last_commit_author
        );
    }
    println!("\n{} unique file(s)", records.len());

    Ok(())
}
