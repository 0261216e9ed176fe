//! The `dcm2png convert` command: batch conversion with progress and
//! per-file reporting.

use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Args;
use dcm2png_core::{
    ensure_input_dir, ensure_output_dir, BatchDispatcher, Config, DcmConverter, FileDiscovery,
    Reporter,
};

/// Arguments for the `convert` command.
#[derive(Args, Debug)]
pub struct ConvertArgs {
    /// Directory to search for DICOM files recursively
    #[arg(required = true)]
    pub input: PathBuf,

    /// Directory to write PNG files into
    #[arg(required = true)]
    pub output: PathBuf,

    /// Filename suffix appended to output PNG stems
    #[arg(short, long)]
    pub suffix: Option<String>,

    /// Maximum number of concurrent conversion workers
    #[arg(short, long)]
    pub max_workers: Option<usize>,

    /// Fail instead of creating the output directory when it is missing
    #[arg(long)]
    pub no_create_output_dir: bool,
}

/// Execute the convert command.
pub async fn execute(args: ConvertArgs, verbose: bool) -> anyhow::Result<()> {
    let config = Config::load()?;

    // CLI flags override config values
    let suffix = args
        .suffix
        .clone()
        .unwrap_or_else(|| config.naming.suffix.clone());
    let max_workers = args.max_workers.unwrap_or(config.processing.max_workers);
    let create_output_dir = config.processing.create_output_dir && !args.no_create_output_dir;

    let input = expand_path(&args.input);
    let output = expand_path(&args.output);

    ensure_input_dir(&input)?;
    ensure_output_dir(&output, create_output_dir)?;

    let discovery = FileDiscovery::new(&config.processing.extension);
    let files = discovery.discover(&input);
    if files.is_empty() {
        tracing::warn!(
            "No .{} files found under {:?}",
            config.processing.extension,
            input
        );
        return Ok(());
    }
    tracing::info!("Found {} DICOM file(s) to convert", files.len());

    let total = files.len();
    let total_bytes = FileDiscovery::total_size(&files);
    let progress = create_progress_bar(total as u64);
    let start_time = Instant::now();

    let converter = DcmConverter::new(output, suffix);
    let dispatcher = BatchDispatcher::new(max_workers);

    let stdout = std::io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), total, verbose);

    let results = dispatcher
        .run(
            &files,
            move |path| converter.convert(path),
            |index, result| {
                if let Err(e) = reporter.report(index, result) {
                    tracing::warn!("Failed to write report line: {e}");
                }
                progress.inc(1);
            },
        )
        .await;

    progress.finish_and_clear();

    let succeeded = results.iter().filter(|r| r.is_success()).count();
    let failed = total - succeeded;
    print_summary(succeeded, failed, total_bytes, start_time.elapsed());

    if failed > 0 {
        anyhow::bail!("{failed} of {total} conversions failed");
    }
    Ok(())
}

/// Expand a leading tilde in a user-supplied path.
fn expand_path(path: &Path) -> PathBuf {
    let raw = path.to_string_lossy();
    PathBuf::from(shellexpand::tilde(raw.as_ref()).into_owned())
}

/// Create a progress bar for batch conversion.
fn create_progress_bar(total: u64) -> indicatif::ProgressBar {
    use indicatif::{ProgressBar, ProgressStyle};

    let pb = ProgressBar::new(total);
    pb.set_style(
        ProgressStyle::default_bar()
            .template(
                "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%)",
            )
            .unwrap()
            .progress_chars("##-"),
    );
    pb
}

/// Print a formatted summary table after batch conversion.
fn print_summary(succeeded: usize, failed: usize, total_bytes: u64, elapsed: std::time::Duration) {
    let total = succeeded + failed;
    let seconds = elapsed.as_secs_f64();
    let rate = if seconds > 0.0 {
        total as f64 / seconds
    } else {
        0.0
    };
    let throughput = if seconds > 0.0 {
        total_bytes as f64 / 1_000_000.0 / seconds
    } else {
        0.0
    };

    eprintln!();
    eprintln!("  ====================================");
    eprintln!("               Summary");
    eprintln!("  ====================================");
    eprintln!("    Succeeded:    {:>8}", succeeded);
    if failed > 0 {
        eprintln!("    Failed:       {:>8}", failed);
    }
    eprintln!("  ------------------------------------");
    eprintln!("    Total:        {:>8}", total);
    eprintln!("    Duration:     {:>7.1}s", seconds);
    eprintln!("    Rate:         {:>7.1} file/sec", rate);
    eprintln!("    Throughput:   {:>7.1} MB/sec", throughput);
    eprintln!("  ====================================");
}
