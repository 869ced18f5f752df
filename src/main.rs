mod cli;

use multirip::{config, jobs, scheduler::DriveScheduler};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Respect RUST_LOG env var if set, otherwise use defaults based on verbose flag
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            "multirip=debug,multirip_av=debug".to_string()
        } else {
            "multirip=info,multirip_av=info".to_string()
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(&env_filter)
        .init();

    let config_path = config::resolve_config_path(cli.config.as_deref())?;

    match cli.command {
        Commands::Init => init_config(&config_path),
        Commands::Verify => verify_config(&config_path),
        Commands::Run {
            jobs,
            dry_run,
            log_dir,
        } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(run_jobs(&config_path, &jobs, dry_run, log_dir))
        }
        Commands::Scan { drive, list } => {
            let rt = tokio::runtime::Runtime::new()?;
            rt.block_on(scan_drive(&config_path, &drive, list))
        }
    }
}

fn init_config(path: &Path) -> Result<()> {
    if config::persist::init_config(path)? {
        println!("Created default config file: {}", path.display());
    } else {
        println!("Config file already exists: {}", path.display());
    }
    Ok(())
}

fn verify_config(path: &Path) -> Result<()> {
    let config = config::load_config(path)?;

    println!("Current Configuration ({}):", path.display());
    println!("{}", config::persist::render_config(&config)?);

    println!("Verifying paths...");
    let checks = config::verify::check_paths(&config);
    for check in &checks {
        match check.error {
            Some(ref e) => println!("  ✗ {}: {} (Error: {})", check.label, check.path.display(), e),
            None => println!("  ✓ {}: {} (OK)", check.label, check.path.display()),
        }
    }

    if !checks.iter().all(|c| c.ok()) {
        anyhow::bail!("configuration verification failed");
    }

    println!("\nConfiguration OK.");
    Ok(())
}

async fn run_jobs(
    config_path: &Path,
    jobs_path: &Path,
    dry_run: bool,
    log_dir: Option<PathBuf>,
) -> Result<()> {
    let config = config::load_config(config_path)?;
    let jobs_config = config::load_jobs(jobs_path)?;

    let groups = jobs::build_drive_groups(&config, &jobs_config);
    if groups.skipped() > 0 {
        tracing::warn!("Skipped {} job(s) with unusable filenames", groups.skipped());
    }

    if groups.is_empty() {
        tracing::warn!("No jobs found to process.");
        return Ok(());
    }

    tracing::info!(
        "Planned {} job(s) across {} drive(s)",
        groups.job_count(),
        groups.drive_count()
    );

    if dry_run {
        for (drive, queue) in groups.iter() {
            println!("{drive}:");
            for job in queue {
                println!("  [{}] {}", job.id, job.name);
                println!("      {}", job.command);
            }
        }
        println!(
            "\n[DRY RUN] Would run {} job(s) on {} drive(s)",
            groups.job_count(),
            groups.drive_count()
        );
        return Ok(());
    }

    let log_dir = log_dir.unwrap_or_else(|| config.output.log_dir.clone());
    DriveScheduler::new(log_dir).run(groups).await;

    tracing::info!("All jobs completed.");
    Ok(())
}

async fn scan_drive(config_path: &Path, drive: &str, list: bool) -> Result<()> {
    let config = config::load_config(config_path)?;

    let scan = multirip_av::scan_titles(&config.handbrake.binary, drive)
        .await
        .context("could not determine 'Play All' title")?;

    if list {
        for title in &scan.titles {
            let secs = title.duration.as_secs();
            println!(
                "Title {:>3}: {:02}:{:02}:{:02}",
                title.title,
                secs / 3600,
                (secs / 60) % 60,
                secs % 60
            );
        }
    }

    println!("The 'Play All' title is: {}", scan.play_all.title);
    Ok(())
}
