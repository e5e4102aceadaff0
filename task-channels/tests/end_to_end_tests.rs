use geo_grid_core::pipeline::JobConfig;
use geo_grid_task_channels::run_job;
use std::fs;
use std::path::Path;

// Two adjacent cells sharing the boundary x = 1. The post sitting exactly
// on the boundary belongs to L, the cell whose x interval closes on 1.
fn write_fixture(dir: &Path) -> JobConfig {
    let grid_path = dir.join("grid.json");
    fs::write(
        &grid_path,
        r#"{
            "features": [
                {"properties": {"id": "L", "xmin": 0.0, "xmax": 1.0, "ymin": 0.0, "ymax": 1.0}},
                {"properties": {"id": "R", "xmin": 1.0, "xmax": 2.0, "ymin": 0.0, "ymax": 1.0}}
            ]
        }"#,
    )
    .unwrap();

    // Shaped like the real dump: a header line, records separated by
    // trailing commas, and a closing line. Header and footer fail to parse
    // and are skipped.
    let posts_path = dir.join("posts.json");
    fs::write(
        &posts_path,
        concat!(
            "{\"total_rows\": 3, \"rows\": [\n",
            "{\"doc\": {\"coordinates\": {\"coordinates\": [0.5, 0.5]}, \"text\": \"go #a now\"}},\n",
            "{\"doc\": {\"coordinates\": {\"coordinates\": [1.0, 0.5]}, \"text\": \"go #a now\"}},\n",
            "{\"doc\": {\"coordinates\": {\"coordinates\": [1.5, 0.5]}, \"text\": \"go #b now\"}}\n",
            "]}",
        ),
    )
    .unwrap();

    JobConfig {
        grid_path,
        posts_path,
    }
}

#[tokio::test]
async fn test_two_workers_classify_and_rank_end_to_end() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_fixture(dir.path());

    let report = run_job(job, 2).await.unwrap();

    assert_eq!(report.cells.len(), 2);
    assert_eq!(report.cells[0].id, "L");
    assert_eq!(report.cells[0].count, 2);
    assert_eq!(report.cells[0].tags, vec![("a".to_string(), 2)]);
    assert_eq!(report.cells[1].id, "R");
    assert_eq!(report.cells[1].count, 1);
    assert_eq!(report.cells[1].tags, vec![("b".to_string(), 1)]);
}

#[tokio::test]
async fn test_worker_count_does_not_change_the_report() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_fixture(dir.path());

    let mut renderings = Vec::new();
    for workers in 1..=4 {
        let report = run_job(job.clone(), workers).await.unwrap();
        renderings.push(report.to_string());
    }

    for rendering in &renderings[1..] {
        assert_eq!(rendering, &renderings[0]);
    }
}

#[tokio::test]
async fn test_rerun_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let job = write_fixture(dir.path());

    let first = run_job(job.clone(), 3).await.unwrap().to_string();
    let second = run_job(job, 3).await.unwrap().to_string();
    assert_eq!(first, second);
}

#[tokio::test]
async fn test_missing_grid_fails_the_whole_run() {
    let dir = tempfile::tempdir().unwrap();
    let mut job = write_fixture(dir.path());
    job.grid_path = dir.path().join("no-such-grid.json");

    assert!(run_job(job, 2).await.is_err());
}
