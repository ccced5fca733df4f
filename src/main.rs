//! figma-design-tokens CLI - generates code from downloaded Figma documents

use std::fs;
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use serde::Serialize;

use figma_design_tokens::{generate_step_with_template, TokenExt, DEFAULT_TEMPLATE};
use figma_design_tokens_core::{
    config::DEFAULT_CONFIGURATION_PATH, parse_documents, Color, Configuration, Document,
    LogDiagnostics, Spacing, StepConfiguration, TemplateType, TextStyle, Token,
};

#[derive(Parser)]
#[command(name = "figma-design-tokens")]
#[command(version)]
#[command(about = "Generate code from the design tokens of Figma documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run every step of a configuration file
    Generate {
        /// Configuration file
        #[arg(short, long, value_name = "FILE", default_value = DEFAULT_CONFIGURATION_PATH)]
        config: PathBuf,

        #[command(flatten)]
        documents: DocumentArgs,

        /// Extract and report only, do not write any file
        #[arg(short, long)]
        lint: bool,
    },
    /// Generate colors
    Colors(StepArgs),
    /// Generate text styles
    TextStyles(StepArgs),
    /// Generate spacings
    Spacings(StepArgs),
}

#[derive(Args)]
struct DocumentArgs {
    /// Figma file or nodes response, as JSON
    #[arg(short, long = "document", value_name = "FILE", required = true)]
    documents: Vec<PathBuf>,
}

#[derive(Args)]
struct StepArgs {
    #[command(flatten)]
    documents: DocumentArgs,

    /// Comma separated list of nodes whose tokens will be extracted.
    /// If omitted or empty, all nodes will be included.
    #[arg(long, value_delimiter = ',')]
    including: Vec<String>,

    /// Comma separated list of nodes whose tokens will be ignored
    #[arg(long, value_delimiter = ',')]
    excluding: Vec<String>,

    /// Native template name ("rust", "css" or "json")
    #[arg(short, long)]
    template: Option<String>,

    /// Path of the file to generate
    #[arg(short = 'o', long)]
    destination: Option<String>,
}

impl StepArgs {
    fn configuration(&self) -> StepConfiguration {
        StepConfiguration {
            including_nodes: Some(self.including.clone()),
            excluding_nodes: Some(self.excluding.clone()),
            destination_path: self.destination.clone(),
            ..StepConfiguration::default()
        }
    }
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            config,
            documents,
            lint,
        } => cmd_generate(&config, &documents, lint),
        Commands::Colors(args) => cmd_step::<Color>(&args),
        Commands::TextStyles(args) => cmd_step::<TextStyle>(&args),
        Commands::Spacings(args) => cmd_step::<Spacing>(&args),
    };

    match result {
        Ok(()) => println!("{}", "Generation completed successfully!".green()),
        Err(e) => {
            eprintln!("{}: {}", "Error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn load_documents(args: &DocumentArgs) -> Result<Vec<Document>, Box<dyn std::error::Error>> {
    let mut documents = Vec::new();
    for path in &args.documents {
        let data = fs::read_to_string(path)
            .map_err(|e| format!("cannot read {}: {}", path.display(), e))?;
        let parsed = parse_documents(&data)?;
        log::debug!("Loaded {} document(s) from {}", parsed.len(), path.display());
        documents.extend(parsed);
    }
    log::info!("Loaded {} document(s)", documents.len());
    Ok(documents)
}

fn cmd_generate(
    config: &Path,
    documents: &DocumentArgs,
    lint: bool,
) -> Result<(), Box<dyn std::error::Error>> {
    let configuration = Configuration::load(config)?;
    let base_path = config.parent().unwrap_or_else(|| Path::new(""));
    let documents = load_documents(documents)?;
    figma_design_tokens::generate(&documents, &configuration, base_path, lint, &LogDiagnostics)?;
    Ok(())
}

fn cmd_step<T: Token + TokenExt + Serialize>(
    args: &StepArgs,
) -> Result<(), Box<dyn std::error::Error>> {
    let documents = load_documents(&args.documents)?;
    let step = args.configuration();
    let template = match &args.template {
        Some(name) => TemplateType::Native(name.clone()),
        None => step.template(DEFAULT_TEMPLATE),
    };
    generate_step_with_template::<T>(&documents, &step, &template, false, &LogDiagnostics)?;
    Ok(())
}
