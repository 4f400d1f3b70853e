use std::path::PathBuf;

use anyhow::Context as _;
use clap::{ArgAction, Parser};
use tracing::level_filters::LevelFilter;

/// Generate a mirror-symmetric identicon PNG for a name.
#[derive(Parser, Debug)]
#[command(name = "identicon", version)]
struct Cli {
    /// Name to derive the identicon from; the PNG is written as `<NAME>.png`.
    name: String,

    /// Output directory.
    #[arg(long, default_value = ".")]
    out_dir: PathBuf,

    /// Background color as `RRGGBB` or `RRGGBBAA` hex (default: transparent).
    #[arg(long, value_parser = parse_hex_rgba)]
    background: Option<[u8; 4]>,

    /// Print the derived identity (digest, grid, cells, regions) as JSON to stderr.
    #[arg(long)]
    dump_identity: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(err) = run(&cli) {
        tracing::error!(name = %cli.name, "{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let opts = identicon::GenerateOpts {
        out_dir: cli.out_dir.clone(),
        settings: identicon::RenderSettings {
            clear_rgba: cli.background,
            ..identicon::RenderSettings::default()
        },
        ..identicon::GenerateOpts::default()
    };

    let generated = identicon::generate(&cli.name, &opts)
        .with_context(|| format!("generate identicon for '{}'", cli.name))?;

    if cli.dump_identity {
        let json = serde_json::to_string_pretty(&generated.identity)
            .context("serialize identity JSON")?;
        eprintln!("{json}");
    }

    println!("{}", cli.name);
    Ok(())
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn parse_hex_rgba(s: &str) -> anyhow::Result<[u8; 4]> {
    let s = s.trim_start_matches('#');
    anyhow::ensure!(
        s.len() == 6 || s.len() == 8,
        "expected RRGGBB or RRGGBBAA, got '{s}'"
    );
    anyhow::ensure!(
        s.bytes().all(|b| b.is_ascii_hexdigit()),
        "expected only hex digits, got '{s}'"
    );
    let byte = |i: usize| -> anyhow::Result<u8> {
        let digits = &s[i..i + 2];
        u8::from_str_radix(digits, 16).with_context(|| format!("invalid hex digits '{digits}'"))
    };
    let a = if s.len() == 8 { byte(6)? } else { 255 };
    Ok([byte(0)?, byte(2)?, byte(4)?, a])
}
