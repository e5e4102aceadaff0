use clap::Parser;
use geo_grid_core::pipeline::JobConfig;
use geo_grid_task_channels::run_job;
use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Instant;

/// Classify geotagged posts into grid cells and rank cells and hashtags.
#[derive(Parser, Debug)]
#[command(name = "geo-grid", version)]
struct Args {
    /// Grid definition file (features with an id and bounds)
    #[arg(long, default_value = "melbGrid.json")]
    grid: PathBuf,

    /// Post stream, one JSON record per line
    #[arg(long, default_value = "bigTwitter.json")]
    posts: PathBuf,

    /// Number of worker tasks
    #[arg(long, default_value_t = 4)]
    workers: usize,
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    if args.workers == 0 {
        eprintln!("At least one worker is required");
        return ExitCode::FAILURE;
    }

    let start_time = Instant::now();

    println!("=== GEO-GRID AGGREGATION ===");
    println!("Configuration:");
    println!("  - Grid: {}", args.grid.display());
    println!("  - Posts: {}", args.posts.display());
    println!("  - Workers: {}", args.workers);
    println!("\nStarting workers...");

    let job = JobConfig {
        grid_path: args.grid,
        posts_path: args.posts,
    };

    match run_job(job, args.workers).await {
        Ok(report) => {
            println!("\n=== REPORT ===");
            print!("{}", report);

            let elapsed = start_time.elapsed();
            println!("\nTotal time: {:.2}s", elapsed.as_secs_f64());
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Run failed: {}", e);
            ExitCode::FAILURE
        }
    }
}
