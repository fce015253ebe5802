use crate::areas::worktree::Worktree;
use crate::artifacts::tree::{FileTreeNode, build_tree, count_changes_in_tree};
use colored::Colorize;

pub async fn run(worktree: &Worktree) -> anyhow::Result<()> {
    let records = worktree.changes().await?;

    if records.is_empty() {
        println!("nothing to report, working copy clean");
        return Ok(());
    }

    let forest = build_tree(&records);
    for node in &forest {
        render(node, 0);
    }

    let total = forest.iter().map(count_changes_in_tree).sum::<usize>();
    println!("\n{} changed file(s)", total);

    Ok(())
}

fn render(node: &FileTreeNode, depth: usize) {
    let indent = "  ".repeat(depth);

    if node.is_directory {
        println!(
            "{}{}/ {}",
            indent,
            node.name.blue().bold(),
            format!("({})", count_changes_in_tree(node)).dimmed()
        );
    } else if let Some(change) = &node.change {
        // the change record renders its own marker, so only the name is ours
        let mut display = change.clone();
        display.file = node.name.clone();
        println!("{}{}", indent, display);
    } else {
        println!("{}{}", indent, node.name);
    }

    for child in &node.children {
        render(child, depth + 1);
    }
}
