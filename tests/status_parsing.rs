use gitledger::artifacts::status::parser::{DiffScope, parse_status, parse_status_line};
use pretty_assertions::assert_eq;
use rstest::rstest;

mod common;

#[rstest]
#[case("A  src/app.ts", 'A', "src/app.ts", true, false)]
#[case(" M src/app.ts", 'M', "src/app.ts", false, false)]
#[case("?? newfile.txt", '?', "newfile.txt", false, true)]
#[case("MM src/app.ts", 'M', "src/app.ts", true, false)]
#[case("D  gone.rs", 'D', "gone.rs", true, false)]
fn classifies_status_lines(
    #[case] line: &str,
    #[case] status: char,
    #[case] file: &str,
    #[case] is_staged: bool,
    #[case] is_untracked: bool,
) {
    let parsed = parse_status_line(line).expect("line should produce a record");

    assert_eq!(parsed.status(), status);
    assert_eq!(parsed.file, file);
    assert_eq!(parsed.is_staged, is_staged);
    assert_eq!(parsed.is_untracked, is_untracked);
}

#[test]
fn index_status_wins_when_both_sides_changed() {
    let parsed = parse_status_line("AM src/app.ts").unwrap();

    assert!(parsed.is_staged);
    assert!(parsed.has_working_changes);
    assert_eq!(parsed.status(), 'A');
}

#[rstest]
#[case("")]
#[case("M")]
#[case("??")]
fn lines_shorter_than_three_characters_are_skipped(#[case] line: &str) {
    assert_eq!(parse_status_line(line), None);
}

#[test]
fn line_with_no_reportable_change_is_skipped() {
    assert_eq!(parse_status_line("   some/file.rs"), None);
}

#[test]
fn prefix_without_separating_blank_is_handled() {
    // some tool outputs omit the blank between the status chars and the path
    let parsed = parse_status_line("A src/app.ts").unwrap();

    assert_eq!(parsed.file, "src/app.ts");
    assert!(parsed.is_staged);
    assert_eq!(parsed.status(), 'A');
}

#[test]
fn rename_lines_keep_the_new_path() {
    let parsed = parse_status_line("R  old_name.rs -> new_name.rs").unwrap();

    assert_eq!(parsed.file, "new_name.rs");
    assert_eq!(parsed.status(), 'R');
}

#[test]
fn trailing_whitespace_is_trimmed_from_the_path() {
    let parsed = parse_status_line("M  src/lib.rs   ").unwrap();

    assert_eq!(parsed.file, "src/lib.rs");
}

#[rstest]
#[case(common::change("f", 'A', true, false), "new file:   ")]
#[case(common::change("f", 'M', false, false), "modified:   ")]
#[case(common::change("f", '?', false, true), "untracked:  ")]
#[case(common::change("f", 'X', true, false), "changed:    ")]
fn records_carry_git_style_labels(
    #[case] record: gitledger::artifacts::status::change_record::ChangeRecord,
    #[case] label: &str,
) {
    assert_eq!(record.label(), label);
}

#[tokio::test]
async fn staged_changes_get_staged_diff_counts() {
    let stats = common::FixtureStatSource::default()
        .with_counts("src/app.ts", DiffScope::Staged, 10, 2)
        .with_counts("src/app.ts", DiffScope::Unstaged, 99, 99);

    let records = parse_status("A  src/app.ts", &stats).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].additions, Some(10));
    assert_eq!(records[0].deletions, Some(2));
}

#[tokio::test]
async fn unstaged_changes_get_unstaged_diff_counts() {
    let stats = common::FixtureStatSource::default()
        .with_counts("src/app.ts", DiffScope::Staged, 99, 99)
        .with_counts("src/app.ts", DiffScope::Unstaged, 3, 1);

    let records = parse_status(" M src/app.ts", &stats).await;

    assert_eq!(records[0].additions, Some(3));
    assert_eq!(records[0].deletions, Some(1));
}

#[tokio::test]
async fn untracked_files_carry_no_counts() {
    let stats = common::FixtureStatSource::default().with_counts(
        "newfile.txt",
        DiffScope::Unstaged,
        5,
        0,
    );

    let records = parse_status("?? newfile.txt", &stats).await;

    assert_eq!(records[0].additions, None);
    assert_eq!(records[0].deletions, None);
    assert!(records[0].is_untracked);
}

#[tokio::test]
async fn failed_lookup_degrades_to_absent_counts_without_spoiling_the_batch() {
    let stats = common::FixtureStatSource::default()
        .with_counts("ok.rs", DiffScope::Staged, 7, 4)
        .failing_for("broken.rs");

    let records = parse_status("A  broken.rs\nA  ok.rs", &stats).await;

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].file, "broken.rs");
    assert_eq!(records[0].additions, None);
    assert_eq!(records[1].file, "ok.rs");
    assert_eq!(records[1].additions, Some(7));
}

#[tokio::test]
async fn batch_skips_malformed_lines_and_keeps_the_rest() {
    let stats = common::FixtureStatSource::default();

    let records = parse_status("M\nA  kept.rs\n\n   ignored.rs", &stats).await;

    assert_eq!(records.len(), 1);
    assert_eq!(records[0].file, "kept.rs");
}
