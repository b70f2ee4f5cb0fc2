/// End-to-end tests for scanning history trees
///
/// These tests write real history files and run the full pipeline through the public API
mod common;

use chrono::{TimeZone, Utc};
use common::{HistoryDirBuilder, HistoryFileBuilder, days_ago, local_date};
use search_directory_history::models::FileScanResult;
use search_directory_history::{HistoryScanner, SearchConfig, scan_history_tree};

fn collect(root: &std::path::Path, config: SearchConfig) -> Vec<FileScanResult> {
    let scanner = HistoryScanner::local(config);
    let mut results = Vec::new();
    scan_history_tree(root, &scanner, |result| {
        if result.has_output() {
            results.push(result.clone());
        }
    })
    .unwrap();
    results
}

#[test]
fn test_e2e_single_match_without_context() {
    // Fixed dates so the window is deterministic: all of November 2023
    let history = HistoryFileBuilder::new()
        .raw(": 1700000000:0;cmd1")
        .raw(": 1700003600:0;cmd2")
        .build();
    let dir = HistoryDirBuilder::new().with_file("zsh_history", &history).build();

    let scanner = HistoryScanner::new(SearchConfig::new("cmd2").with_from("1m").with_window("1m"), Utc);
    let window = scanner.window_at(&Utc.with_ymd_and_hms(2023, 12, 1, 0, 0, 0).unwrap());
    let result = scanner.scan_file_in(&dir.path().join("zsh_history"), &window).unwrap();

    assert_eq!(result.lines, vec!["2023-11-14: cmd2"]);
    assert!(result.lines.iter().all(|l| !l.contains("cmd1")));
}

#[test]
fn test_e2e_search_across_tree() {
    let dir = HistoryDirBuilder::new()
        .with_history(
            "home/alice/infra/history",
            &HistoryFileBuilder::new()
                .command_days_ago(3, "kubectl get pods -n prod")
                .command_days_ago(2, "kubectl describe statefulset db"),
        )
        .with_history(
            "home/alice/web/history",
            &HistoryFileBuilder::new().command_days_ago(1, "npm run build"),
        )
        .build();

    let results = collect(dir.path(), SearchConfig::new("kubectl & statefulset | npm"));
    assert_eq!(results.len(), 2);
    assert!(results[0].path.ends_with("home/alice/infra/history"));
    assert_eq!(results[0].lines.len(), 1);
    assert!(results[0].lines[0].ends_with(": kubectl describe statefulset db"));
    assert!(results[1].lines[0].ends_with(": npm run build"));
}

#[test]
fn test_e2e_dates_rendered_in_local_time() {
    let timestamp = days_ago(10);
    let dir = HistoryDirBuilder::new()
        .with_history("history", &HistoryFileBuilder::new().command_at(timestamp, "make"))
        .build();

    let results = collect(dir.path(), SearchConfig::new("make"));
    assert_eq!(results[0].lines, vec![format!("{}: make", local_date(timestamp))]);
}

#[test]
fn test_e2e_date_window() {
    let dir = HistoryDirBuilder::new()
        .with_history(
            "history",
            &HistoryFileBuilder::new()
                .command_days_ago(100, "git old")
                .command_days_ago(40, "git middle")
                .command_days_ago(5, "git recent"),
        )
        .build();

    // Window starts ~2 months back and lasts one month
    let results = collect(dir.path(), SearchConfig::new("git").with_from("2m").with_window("1m"));
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].lines.len(), 1);
    assert!(results[0].lines[0].ends_with("git middle"));
}

#[test]
fn test_e2e_dedup_is_per_file() {
    let file = HistoryFileBuilder::new()
        .command_days_ago(3, "docker ps")
        .command_days_ago(2, "docker ps")
        .command_days_ago(1, "docker ps");
    let dir = HistoryDirBuilder::new()
        .with_history("a/history", &file)
        .with_history("b/history", &file)
        .build();

    let results = collect(dir.path(), SearchConfig::new("docker"));
    // One line per file: the set resets between files
    assert_eq!(results.len(), 2);
    assert_eq!(results[0].lines.len(), 1);
    assert_eq!(results[1].lines.len(), 1);
}

#[test]
fn test_e2e_context_around_isolated_match() {
    let mut file = HistoryFileBuilder::new();
    for i in 0..5 {
        file = file.command_days_ago(20 - i, &format!("echo before{}", i));
    }
    file = file.command_days_ago(14, "terraform apply");
    for i in 0..5 {
        file = file.command_days_ago(13 - i, &format!("echo after{}", i));
    }
    let dir = HistoryDirBuilder::new().with_history("history", &file).build();

    let results = collect(dir.path(), SearchConfig::new("terraform").with_context(2));
    let tags: Vec<char> = results[0].lines.iter().map(|l| l.chars().next().unwrap()).collect();
    assert_eq!(tags, vec!['+', '=', '-', '-']);
    assert!(results[0].lines[0].ends_with("echo before4"));
    assert!(results[0].lines[1].ends_with("terraform apply"));
    assert!(results[0].lines[3].ends_with("echo after1"));
}

#[test]
fn test_e2e_multiline_record() {
    let now = days_ago(1);
    let dir = HistoryDirBuilder::new()
        .with_history(
            "history",
            &HistoryFileBuilder::new()
                .multiline_at(now, &["docker run \\", "  -v /data:/data \\", "  postgres:16"])
                .command_at(now + 60, "psql"),
        )
        .build();

    let results = collect(dir.path(), SearchConfig::new("postgres").with_multiline(true));
    assert_eq!(results[0].lines.len(), 3);
    assert!(results[0].lines[0].ends_with("docker run \\"));
    assert!(results[0].lines[2].ends_with("  postgres:16"));
}

#[test]
fn test_e2e_non_history_files_ignored() {
    let recent = HistoryFileBuilder::new().command_days_ago(1, "ls");
    let dir = HistoryDirBuilder::new()
        .with_history("notes.txt", &recent)
        .with_history("history.bak", &recent)
        .with_history("history", &recent)
        .build();

    let results = collect(dir.path(), SearchConfig::new("ls"));
    assert_eq!(results.len(), 1);
    assert!(results[0].path.ends_with("history"));
}
