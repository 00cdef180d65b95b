// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;
use rp_core::{BranchInfo, Build, BuildId, BuildStatus, CommitId, CommitWindow};

fn render_jobs(jobs: &[Job], now_ms: u64) -> String {
    std::env::set_var("NO_COLOR", "1");
    let mut buf = Vec::new();
    format_job_list(&mut buf, jobs, now_ms);
    String::from_utf8(buf).unwrap()
}

#[test]
fn job_list_marks_primary_branch() {
    let jobs = vec![
        Job {
            id: JobId::new("p/master"),
            branch: Some(BranchInfo {
                project: "p".to_string(),
                branch: "master".to_string(),
                primary: true,
            }),
            created_at_ms: 1_000,
            last_build_number: 4,
        },
        Job { id: JobId::new("nightly"), branch: None, created_at_ms: 0, last_build_number: 0 },
    ];
    let out = render_jobs(&jobs, 121_000);
    let lines: Vec<&str> = out.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[1].starts_with("p/master"));
    assert!(lines[1].contains("master *"));
    assert!(lines[1].ends_with("2m"));
    assert!(lines[2].contains("-"));
}

#[test]
fn build_list_shows_reference_and_window_size() {
    std::env::set_var("NO_COLOR", "1");
    let window = CommitWindow::new(
        vec![CommitId::new("c2c2c2c2c2c2"), CommitId::new("c1c1c1c1c1c1")],
        CommitId::new("c2c2c2c2c2c2"),
        CommitId::none(),
    )
    .unwrap();
    let views = vec![BuildView {
        build: Build {
            id: BuildId::new("main#2"),
            job: JobId::new("main"),
            number: 2,
            status: BuildStatus::Completed,
            started_at_ms: 0,
            completed_at_ms: Some(1),
        },
        window: Some(window),
        reference: Some(BuildId::new("main#1")),
        dangling: true,
        resolved: true,
    }];

    let mut buf = Vec::new();
    format_build_list(&mut buf, &views);
    let out = String::from_utf8(buf).unwrap();
    let row = out.lines().nth(1).unwrap();
    assert!(row.starts_with("main#2"));
    assert!(row.contains("c2c2c2c2 "));
    assert!(row.ends_with("main#1 (deleted)"));
}
