use std::io::Write;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Result;
use clap::Parser;

use binaural_analyzer::{batch, report_for, PoolConfig};

#[derive(Parser, Debug)]
#[command(author, version, about = "Stereo dominant-frequency and binaural beat analyzer", long_about = None)]
struct Args {
    /// Audio file to analyze; without it, every *.flac in the current
    /// directory is processed in parallel.
    #[arg()]
    file: Option<PathBuf>,
}

fn main() -> Result<ExitCode> {
    env_logger::init();
    let args = Args::parse();

    // Mode fichier unique : ni découverte, ni confirmation.
    if let Some(file) = args.file {
        println!("{}", report_for(&file));
        return Ok(ExitCode::SUCCESS);
    }

    let files = batch::discover_flac_files(std::path::Path::new("."))?;
    if files.is_empty() {
        println!("No FLAC files found in current directory");
        return Ok(ExitCode::FAILURE);
    }

    let pool = PoolConfig::new(num_cpus::get(), files.len());

    println!("\nSystem Information:");
    println!("Total CPU cores detected: {}", pool.total_cores);
    println!(
        "Cores to be used: {} ({:.0}% of CPU)",
        pool.workers,
        pool.utilization_percent()
    );
    println!("Files to process: {}", files.len());

    if !confirm("\nProceed with processing? (y/N): ", std::io::stdin().lock())? {
        println!("Operation cancelled by user");
        return Ok(ExitCode::SUCCESS);
    }

    println!("\nProcessing {} files...", files.len());
    for report in batch::run_batch(&files, &pool)? {
        println!("{report}");
    }

    Ok(ExitCode::SUCCESS)
}

/// Seul un « y » (insensible à la casse) vaut confirmation.
///
/// La source de lecture est injectée pour rester testable sans stdin.
fn confirm(prompt: &str, mut input: impl std::io::BufRead) -> Result<bool> {
    print!("{prompt}");
    std::io::stdout().flush()?;
    let mut response = String::new();
    input.read_line(&mut response)?;
    Ok(response.trim().eq_ignore_ascii_case("y"))
}
