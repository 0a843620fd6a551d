use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use log::{info, warn};
use std::io::{IsTerminal, Read};
use std::path::{Path, PathBuf};

use bddgen::auth::ApiKey;
use bddgen::config::{Config, OutputFormat};
use bddgen::generator::{self, GenerationReport, GenerationSettings};
use bddgen::prompt::{RequirementsText, SAMPLE_REQUIREMENTS};
use bddgen::providers::{CompletionBackend, GeminiClient};

use crate::output::{self, GenerationProgress};

#[derive(Parser)]
#[command(name = "bddgen")]
#[command(author, version, about = "BDD Scenario Generator", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Configuration file (defaults to ./bddgen.toml and friends)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Report format
    #[arg(short, long, global = true, value_enum)]
    format: Option<OutputFormat>,

    #[arg(short, long, global = true, default_value_t = false)]
    pretty: bool,

    /// Write the report here instead of stdout
    #[arg(short, long, global = true)]
    output: Option<PathBuf>,

    /// Where to write the happy-path feature file
    #[arg(long, global = true)]
    feature_file: Option<PathBuf>,

    #[arg(long, global = true, default_value_t = false)]
    no_feature_file: bool,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Gherkin scenarios from business requirements
    Generate {
        /// Requirements text
        #[arg(short, long, conflicts_with = "input")]
        requirements: Option<String>,

        /// Read requirements from a file
        #[arg(short, long)]
        input: Option<PathBuf>,

        #[arg(short = 'k', long, env = "GEMINI_API_KEY", hide_env_values = true)]
        api_key: Option<String>,

        #[arg(short, long)]
        model: Option<String>,

        #[arg(long)]
        base_url: Option<String>,
    },
    /// Validate and select happy paths from existing Gherkin text
    Process {
        /// Gherkin file to process (reads stdin when omitted)
        #[arg(short, long)]
        input: Option<PathBuf>,
    },
}

impl Cli {
    async fn execute_generate(
        &self,
        config: &Config,
        requirements: Option<&str>,
        input: Option<&Path>,
        api_key: Option<&str>,
        model: Option<&str>,
        base_url: Option<&str>,
    ) -> Result<()> {
        let requirements = read_requirements(requirements, input)?;

        let api_key = api_key
            .or(config.gemini.api_key.as_deref())
            .map(ApiKey::from);
        let model = model.unwrap_or(&config.gemini.model);
        let base_url = base_url.unwrap_or(&config.gemini.base_url);

        let client = GeminiClient::new(base_url, model, api_key)?;
        info!("Generating scenarios with {} ({})", client.name(), client.model());

        let settings = self.settings(config);
        let mut progress = GenerationProgress::new();
        let result =
            generator::generate(&client, &requirements, &settings, |stage| {
                progress.advance(stage);
            })
            .await;

        let report = match result {
            Ok(report) => {
                progress.finish();
                report
            }
            Err(e) => {
                progress.abandon();
                if e.is_backend() {
                    output::print_backend_failure(client.name());
                }
                return Err(e).context("Scenario generation failed");
            }
        };

        self.emit(config, &report)
    }

    fn execute_process(&self, config: &Config, input: Option<&Path>) -> Result<()> {
        let raw = match input {
            Some(path) => std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read Gherkin file: {}", path.display()))?,
            None => {
                if std::io::stdin().is_terminal() {
                    bail!("No Gherkin input provided (use --input or pipe text on stdin)");
                }
                read_stdin()?
            }
        };

        let report = generator::analyze(raw, &self.settings(config));
        self.emit(config, &report)
    }

    fn settings(&self, config: &Config) -> GenerationSettings {
        let feature_path = self.feature_path(config);
        let feature_file_name = feature_path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or(bddgen::scenarios::FEATURE_FILE_NAME)
            .to_string();

        GenerationSettings {
            rules: config.classifier.clone(),
            header: config.feature.clone(),
            feature_file_name,
        }
    }

    fn feature_path(&self, config: &Config) -> PathBuf {
        self.feature_file
            .clone()
            .unwrap_or_else(|| config.output.feature_file.clone())
    }

    fn emit(&self, config: &Config, report: &GenerationReport) -> Result<()> {
        let format = self.format.unwrap_or(config.output.format);
        let pretty = self.pretty || config.output.pretty;

        let rendered = match format {
            OutputFormat::Summary => output::render_report(report),
            OutputFormat::Json => output::export_json(report, pretty)?,
        };

        if let Some(output_path) = &self.output {
            std::fs::write(output_path, console::strip_ansi_codes(&rendered).as_bytes())
                .with_context(|| format!("Failed to write report: {}", output_path.display()))?;
            info!("Report written to: {}", output_path.display());
        } else {
            println!("{rendered}");
        }

        if self.no_feature_file {
            info!("Skipping feature file");
        } else {
            let path = self.feature_path(config);
            output::write_feature_file(&report.artifact, &path)?;
            output::print_feature_file_saved(&path, report.summary.happy);
        }

        Ok(())
    }

    pub async fn execute(&self) -> Result<()> {
        let config = Config::load(self.config.as_deref())?;

        match &self.command {
            Commands::Generate {
                requirements,
                input,
                api_key,
                model,
                base_url,
            } => {
                self.execute_generate(
                    &config,
                    requirements.as_deref(),
                    input.as_deref(),
                    api_key.as_deref(),
                    model.as_deref(),
                    base_url.as_deref(),
                )
                .await
            }
            Commands::Process { input } => self.execute_process(&config, input.as_deref()),
        }
    }
}

fn read_requirements(text: Option<&str>, input: Option<&Path>) -> Result<RequirementsText> {
    let text = match (text, input) {
        (Some(text), _) => text.to_string(),
        (None, Some(path)) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read requirements file: {}", path.display()))?,
        (None, None) if std::io::stdin().is_terminal() => {
            warn!("No requirements given, using the built-in sample");
            SAMPLE_REQUIREMENTS.to_string()
        }
        (None, None) => read_stdin()?,
    };

    Ok(RequirementsText::new(text)?)
}

fn read_stdin() -> Result<String> {
    let mut buffer = String::new();
    std::io::stdin()
        .read_to_string(&mut buffer)
        .context("Failed to read stdin")?;
    Ok(buffer)
}
