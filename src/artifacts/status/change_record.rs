use colored::Colorize;

const UNTRACKED_MARKER: char = '?';

/// One file's change state relative to the index and working copy.
///
/// Built fresh on every status parse; `additions`/`deletions` are absent when
/// the diff-stat lookup failed or the change has no line counts (untracked
/// files, binary files).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    pub status: char,
    pub file: String,
    pub additions: Option<u32>,
    pub deletions: Option<u32>,
    pub is_staged: bool,
    pub is_untracked: bool,
}

impl ChangeRecord {
    /// Human-readable label for the status character, `git status` style.
    pub fn label(&self) -> &'static str {
        if self.is_untracked {
            return "untracked:  ";
        }
        match self.status {
            'A' => "new file:   ",
            'M' => "modified:   ",
            'D' => "deleted:    ",
            'R' => "renamed:    ",
            'C' => "copied:     ",
            _ => "changed:    ",
        }
    }

    fn status_marker(&self) -> String {
        if self.is_untracked {
            format!("{}{}", UNTRACKED_MARKER, UNTRACKED_MARKER)
        } else {
            format!("{}", self.status)
        }
    }
}

impl std::fmt::Display for ChangeRecord {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let marker = if self.is_untracked {
            self.status_marker().red()
        } else if self.is_staged {
            self.status_marker().green()
        } else {
            self.status_marker().red()
        };
        write!(f, "{} {}", marker, self.file)?;

        if let (Some(added), Some(deleted)) = (self.additions, self.deletions) {
            write!(
                f,
                " {} {}",
                format!("+{}", added).green(),
                format!("-{}", deleted).red()
            )?;
        }

        Ok(())
    }
}
