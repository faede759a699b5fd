use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "gapscan",
    version,
    about = "Security readiness self-assessment with radar chart reports"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    Assess(AssessArgs),
    Init(InitArgs),
    Template(TemplateArgs),
    Score(RunArgs),
    Catalog {
        #[command(subcommand)]
        command: CatalogSubcommand,
    },
    Chart {
        #[command(subcommand)]
        command: ChartSubcommand,
    },
}

#[derive(Debug, Args, Clone)]
pub struct RunArgs {
    /// Comma-separated raw answers in catalog order (e.g. "80,NA,60,...")
    #[arg(long)]
    pub answers: Option<String>,
    /// Answers file (TOML, gap_1..gap_12 keys)
    #[arg(long)]
    pub file: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args, Clone)]
pub struct AssessArgs {
    #[command(flatten)]
    pub run: RunArgs,
    #[arg(long)]
    pub chart: Option<PathBuf>,
    #[arg(long)]
    pub no_chart: bool,
}

#[derive(Debug, Args)]
pub struct InitArgs {
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Args)]
pub struct TemplateArgs {
    #[arg(long)]
    pub out: Option<PathBuf>,
    #[arg(long)]
    pub config: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum CatalogSubcommand {
    Show(CatalogArgs),
}

#[derive(Debug, Args)]
pub struct CatalogArgs {
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Subcommand)]
pub enum ChartSubcommand {
    Render(ChartRenderArgs),
}

#[derive(Debug, Args, Clone)]
pub struct ChartRenderArgs {
    #[command(flatten)]
    pub run: RunArgs,
    #[arg(long)]
    pub out: Option<PathBuf>,
}
