mod catalog;
mod cli;
mod config;
mod core;
mod radar;
mod utils;

use anyhow::{Context, Result, bail};
use clap::Parser;
use cli::{Cli, Commands, RunArgs};
use config::Config;
use core::RunProfile;
use std::path::{Path, PathBuf};
use utils::answers::Selections;

fn main() {
    let exit_code = match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("error: {err:#}");
            2
        }
    };

    std::process::exit(exit_code);
}

fn run() -> Result<i32> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Assess(args) => {
            run_profile(args.run, RunProfile::Full, args.chart, args.no_chart)
        }
        Commands::Score(args) => run_profile(args, RunProfile::ScoreOnly, None, true),
        Commands::Chart { command } => match command {
            cli::ChartSubcommand::Render(args) => {
                run_profile(args.run, RunProfile::ChartOnly, args.out, false)
            }
        },
        Commands::Init(args) => {
            if args.config.is_some() {
                eprintln!("warning: --config is ignored by `gapscan init`; writing ./gapscan.toml");
            }

            let path = std::env::current_dir()?.join("gapscan.toml");
            config::write_default_config(&path)?;
            println!("created {}", path.display());
            Ok(0)
        }
        Commands::Template(args) => {
            let cwd = std::env::current_dir()?;
            let loaded = config::load_config(args.config.as_deref(), &cwd)?;
            let path = args
                .out
                .map(|out| resolve_path(&cwd, &out))
                .unwrap_or_else(|| cwd.join(&loaded.config.answers.file));
            if path.exists() {
                bail!("refusing to overwrite existing answers file: {}", path.display());
            }

            std::fs::write(&path, utils::answers::template_toml())
                .with_context(|| format!("failed writing {}", path.display()))?;
            println!("created {}", path.display());
            Ok(0)
        }
        Commands::Catalog { command } => match command {
            cli::CatalogSubcommand::Show(args) => show_catalog(&args),
        },
    }
}

fn run_profile(
    args: RunArgs,
    profile: RunProfile,
    chart_override: Option<PathBuf>,
    no_chart: bool,
) -> Result<i32> {
    let cwd = std::env::current_dir()?;
    let loaded = config::load_config(args.config.as_deref(), &cwd)?;
    let cfg = loaded.config;

    let selections = resolve_selections(&args, &cfg, &cwd)?;
    let report = core::run_assessment(&selections, &cfg)?;
    let output_json = args.json || cfg.general.json;

    if matches!(profile, RunProfile::Full | RunProfile::ChartOnly) && !no_chart {
        let svg = core::render_chart(&report, &cfg.chart);
        let path = chart_override
            .map(|out| resolve_path(&cwd, &out))
            .unwrap_or_else(|| cwd.join(&cfg.chart.output));
        std::fs::write(&path, svg)
            .with_context(|| format!("failed writing chart {}", path.display()))?;
        if !output_json {
            println!("radar chart written to {}", path.display());
        }
    }

    if profile != RunProfile::ChartOnly {
        if output_json {
            let json_report = core::report::JsonReport::from(&report);
            println!("{}", serde_json::to_string_pretty(&json_report)?);
        } else {
            core::report::print_human(&report);
        }
    }

    if report.exit.ok { Ok(0) } else { Ok(1) }
}

fn resolve_selections(args: &RunArgs, cfg: &Config, cwd: &Path) -> Result<Selections> {
    if let Some(raw) = &args.answers {
        if args.file.is_some() {
            bail!("pass either --answers or --file, not both");
        }
        return utils::answers::parse_list(raw);
    }

    let path = args
        .file
        .as_ref()
        .map(|file| resolve_path(cwd, file))
        .unwrap_or_else(|| cwd.join(&cfg.answers.file));
    if !path.exists() {
        bail!(
            "answers file not found at {} (run `gapscan template` to create one, or pass --answers)",
            path.display()
        );
    }

    utils::answers::load_answers_file(&path)
}

fn show_catalog(args: &cli::CatalogArgs) -> Result<i32> {
    if args.json {
        let listing = serde_json::json!({
            "controls": catalog::CONTROLS,
            "options": catalog::ANSWER_OPTIONS,
        });
        println!("{}", serde_json::to_string_pretty(&listing)?);
        return Ok(0);
    }

    for (index, control) in catalog::CONTROLS.iter().enumerate() {
        println!("{}. [{}] {}", index + 1, control.id, control.title);
        println!("   {}", control.question);
    }

    println!();
    println!("Answer scale:");
    for option in &catalog::ANSWER_OPTIONS {
        println!("- {}", option.label);
    }

    Ok(0)
}

fn resolve_path(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}
