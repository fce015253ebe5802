//! File tree reconstruction
//!
//! Rebuilds the nested directory hierarchy implied by a flat list of change
//! records, for display with per-directory change counts. The tree is
//! path-keyed, so the same set of records always yields a structurally
//! identical forest regardless of input order.

use crate::artifacts::status::change_record::ChangeRecord;
use std::collections::BTreeMap;

/// A node in the reconstructed file tree.
///
/// `path` is always the parent's `path` + "/" + `name` (no prefix for roots).
/// Children are sorted directories-first, then by name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeNode {
    pub name: String,
    pub path: String,
    pub is_directory: bool,
    pub children: Vec<FileTreeNode>,
    pub change: Option<ChangeRecord>,
}

#[derive(Debug, Default)]
struct NodeBuilder {
    change: Option<ChangeRecord>,
    children: BTreeMap<String, NodeBuilder>,
}

/// Build the forest of root nodes for the given change records.
///
/// Path separators are normalized (`\` to `/`) before splitting; records
/// whose path yields no segments are skipped. When a path already exists as
/// a directory node and later shows up as the final segment of a record, the
/// existing node keeps its children and takes the record's change
/// (merge-in-place); duplicate nodes are never created. This function never
/// fails; the worst case is an empty forest.
pub fn build_tree(records: &[ChangeRecord]) -> Vec<FileTreeNode> {
    let mut root = NodeBuilder::default();

    for record in records {
        let normalized = record.file.replace('\\', "/");
        let segments = normalized
            .split('/')
            .filter(|segment| !segment.is_empty())
            .collect::<Vec<_>>();
        if segments.is_empty() {
            continue;
        }

        let mut node = &mut root;
        for segment in &segments {
            node = node.children.entry((*segment).to_string()).or_default();
        }
        node.change = Some(record.clone());
    }

    assemble(root.children, "")
}

fn assemble(children: BTreeMap<String, NodeBuilder>, prefix: &str) -> Vec<FileTreeNode> {
    let mut nodes = children
        .into_iter()
        .map(|(name, builder)| {
            let path = if prefix.is_empty() {
                name.clone()
            } else {
                format!("{}/{}", prefix, name)
            };
            let is_directory = !builder.children.is_empty();
            let children = assemble(builder.children, &path);

            FileTreeNode {
                name,
                path,
                is_directory,
                children,
                change: builder.change,
            }
        })
        .collect::<Vec<_>>();

    nodes.sort_by(|a, b| {
        b.is_directory
            .cmp(&a.is_directory)
            .then_with(|| a.name.cmp(&b.name))
    });
    nodes
}

/// Number of change-carrying descendants of `node`, including itself.
///
/// Used to badge directories with a change count without re-walking the
/// records on each render.
pub fn count_changes_in_tree(node: &FileTreeNode) -> usize {
    let own = usize::from(node.change.is_some());
    own + node
        .children
        .iter()
        .map(count_changes_in_tree)
        .sum::<usize>()
}
