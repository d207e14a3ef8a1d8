// main.rs - CLI entry point

use std::path::Path;
use std::time::Instant;

use indicatif::{ProgressBar, ProgressStyle};
use rayon::prelude::*;

use librtd::cli::{validate_args, validate_record, Args, Config, ValidationResult};
use librtd::core::{
    enumerate_kmers, return_time_distribution_with_mode, Direction, DistributionMap,
    ReturnTimeMode,
};
use librtd::data::{read_records, FastaRecord, FastaRecords};
use librtd::output::ReportWriter;

fn main() {
    if let Err(e) = run_main() {
        eprintln!("❌ ERROR: {}", e);
        std::process::exit(1);
    }
}

fn run_main() -> Result<(), String> {
    let mut args: Args = argh::from_env();
    let command_line = std::env::args().collect::<Vec<String>>().join(" ");

    if args.version {
        println!("librtd v{}", librtd::VERSION);
        return Ok(());
    }

    // Handle generate config first
    if args.generate_config {
        println!("{}", Config::generate_sample());
        eprintln!("\n💡 Save this content to a .toml file and use --config /path/to/config.toml");
        return Ok(());
    }

    // Load configuration file if specified
    if let Some(config_path) = args.config.clone() {
        args = args.with_config_file(&config_path)?;
    }

    let validation = validate_args(&args)?;

    // stdout may carry the report, so every log line goes to stderr
    eprintln!("🚀 {}", librtd::get_info());
    eprintln!(
        "🕒 Started: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );

    // Configure thread pool
    if let Some(n) = args.threads {
        rayon::ThreadPoolBuilder::new()
            .num_threads(n)
            .build_global()
            .map_err(|e| format!("Failed to configure thread pool: {}", e))?;
        eprintln!("🧵 Threads: {}", n);
    } else {
        eprintln!("🧵 Threads: {} (auto-detected)", rayon::current_num_threads());
    }

    eprintln!(
        "🧬 k = {}, return times: {}",
        validation.k,
        validation.mode.description()
    );
    if validation.mode == ReturnTimeMode::Pairwise {
        eprintln!("⚠️  Pairwise mode grows quadratically with the number of distinct k-mers");
    }
    if validation.record_filter.is_active() {
        eprintln!("🔍 Record id filters enabled");
    }

    if args.benchmark {
        return run_benchmark(&args, &validation);
    }

    if args.dry_run {
        return run_dry_run(&validation);
    }

    let total_start = Instant::now();
    let mut records =
        FastaRecords::from_path(Path::new(&validation.input), validation.record_filter.clone())?;
    let mut writer = ReportWriter::create(args.output())?;

    eprintln!("📖 Reading records from: {}", validation.input);
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template(
            "{spinner:.green} [{elapsed_precise}] {pos} records ({per_sec}) {msg}",
        )
        .map_err(|e| format!("Invalid progress template: {}", e))?,
    );

    let mut skipped = 0;
    loop {
        let chunk = records.next_chunk(validation.chunk_size)?;
        if chunk.is_empty() {
            break;
        }

        // Order of results follows the order of the chunk
        let results: Vec<Result<DistributionMap, String>> = chunk
            .par_iter()
            .map(|record| compute_record(record, validation.k, validation.mode))
            .collect();

        for (record, result) in chunk.iter().zip(results) {
            match result {
                Ok(distribution) => writer.write_record(&record.id, &distribution)?,
                Err(e) if args.skip_invalid => {
                    pb.println(format!("⚠️  Skipping {}", e));
                    skipped += 1;
                }
                Err(e) => {
                    pb.abandon();
                    return Err(e);
                }
            }
            pb.inc(1);
        }
        pb.set_message(format!("{} written", writer.records_written()));
    }

    pb.finish_with_message("✅ done");

    let destination = writer.destination().to_string();
    let written = writer.finish()?;

    // Print summary
    let total_elapsed = total_start.elapsed();
    eprintln!("\n🎉 === RTD COMPLETED SUCCESSFULLY ===");
    eprintln!(
        "⏱️  Total execution time: {:.2}s",
        total_elapsed.as_secs_f64()
    );
    eprintln!("📊 Records written: {}", written);
    if skipped > 0 {
        eprintln!("⚠️  Records skipped: {}", skipped);
    }
    if records.filtered() > 0 {
        eprintln!("🔍 Records filtered out: {}", records.filtered());
    }
    eprintln!("📁 Output written to: {}", destination);
    eprintln!("🔧 Command: {}", command_line);

    Ok(())
}

/// Return-time distribution of one record, with the record id in any error
fn compute_record(
    record: &FastaRecord,
    k: usize,
    mode: ReturnTimeMode,
) -> Result<DistributionMap, String> {
    validate_record(&record.sequence, mode)
        .map_err(|e| format!("record '{}': {}", record.id, e))?;
    return_time_distribution_with_mode(&record.sequence, k, mode)
        .map_err(|e| format!("record '{}': {}", record.id, e))
}

/// Validate every record without computing return times
fn run_dry_run(validation: &ValidationResult) -> Result<(), String> {
    let records = read_records(Path::new(&validation.input), validation.record_filter.clone())?;

    let mut invalid = 0;
    for record in &records {
        let check = validate_record(&record.sequence, validation.mode).and_then(|_| {
            enumerate_kmers(&record.sequence, validation.k, false, Direction::Forward)
                .map(|_| ())
                .map_err(|e| e.to_string())
        });
        if let Err(e) = check {
            eprintln!("⚠️  record '{}': {}", record.id, e);
            invalid += 1;
        }
    }

    eprintln!("✅ Dry run completed successfully");
    eprintln!(
        "📊 Records: {} valid, {} invalid",
        records.len() - invalid,
        invalid
    );
    Ok(())
}

/// Time the calculation for increasing k over every record
fn run_benchmark(args: &Args, validation: &ValidationResult) -> Result<(), String> {
    eprintln!("\n🏁 === BENCHMARK MODE ===");

    let records = read_records(Path::new(&validation.input), validation.record_filter.clone())?;
    let total_bases: usize = records.iter().map(|r| r.sequence.len()).sum();
    eprintln!(
        "📊 Loaded {} records ({} bases) from {}",
        records.len(),
        total_bases,
        validation.input
    );

    for k in 1..=args.benchmark_max_k {
        let start = Instant::now();
        let failed = records
            .iter()
            .filter(|record| compute_record(record, k, validation.mode).is_err())
            .count();
        let elapsed = start.elapsed().as_secs_f64();

        let bases_per_sec = if elapsed > 0.0 {
            total_bases as f64 / elapsed
        } else {
            0.0
        };
        eprintln!(
            "⚡ k={}: {:.3}s ({:.0} bases/s, {} records failed)",
            k, elapsed, bases_per_sec, failed
        );
    }

    eprintln!("\n✅ Benchmark completed");
    Ok(())
}
