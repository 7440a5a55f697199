//! piano-notes: piano-like note sample generator.
//!
//! Synthesizes one mono 16-bit WAV file per note of the note table
//! (piano-c.wav ... piano-f.wav by default) in the output directory.

use anyhow::Context;

use piano_notes::cli::Cli;
use piano_notes::generation::generate_all_with_progress;

fn main() {
    let cli = Cli::parse_args();

    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(cli.log_filter()))
        .init();

    if let Err(e) = run(&cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let (config, table) = cli.resolve()?;

    log::info!(
        "{} note(s), {}s at {} Hz, amplitude {}",
        table.len(),
        config.duration_sec,
        config.sample_rate,
        config.amplitude
    );

    let quiet = cli.json;
    let report = generate_all_with_progress(&table, &config, cli.failure_policy(), |file| {
        if !quiet {
            println!("Generated {}", file.path.display());
        }
    })?;

    if cli.json {
        let json = serde_json::to_string_pretty(&report).context("Failed to encode report")?;
        println!("{}", json);
    }

    if !report.is_complete() {
        let failed: Vec<&str> = report.failed.iter().map(|f| f.note.as_str()).collect();
        anyhow::bail!(
            "{} of {} note(s) failed: {}",
            report.failed.len(),
            report.attempted(),
            failed.join(", ")
        );
    }

    Ok(())
}
