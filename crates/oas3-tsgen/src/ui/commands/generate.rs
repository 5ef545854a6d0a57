use std::path::{Path, PathBuf};

use chrono::{Local, Timelike};
use crossterm::style::Stylize;
use oas3_tsgen::{
  generator::{
    GeneratorOptions,
    metrics::GenerationStats,
    orchestrator::{GenerationOutput, Orchestrator},
  },
  utils::SpecLoader,
};

use crate::ui::{Colors, GenerateCommand, colors::Role};

fn format_timestamp() -> String {
  let now = Local::now();
  format!("[{:02}:{:02}:{:02}]", now.hour(), now.minute(), now.second())
}

#[derive(Debug, Clone)]
pub struct GenerateConfig {
  pub input: PathBuf,
  pub output: PathBuf,
  pub verbose: bool,
  pub quiet: bool,
  pub options: GeneratorOptions,
}

impl GenerateConfig {
  pub async fn from_command(command: GenerateCommand) -> anyhow::Result<Self> {
    let base = match &command.config {
      Some(path) => load_options(path).await?,
      None => GeneratorOptions::default(),
    };
    let options = apply_overrides(base, &command);

    Ok(Self {
      input: command.input,
      output: command.output,
      verbose: command.verbose,
      quiet: command.quiet,
      options,
    })
  }

  async fn write_output(&self, output: &GenerationOutput) -> anyhow::Result<()> {
    if let Some(parent) = self.output.parent()
      && !parent.as_os_str().is_empty()
    {
      tokio::fs::create_dir_all(parent).await?;
    }
    let json = serde_json::to_string_pretty(output)?;
    tokio::fs::write(&self.output, json).await?;
    Ok(())
  }
}

async fn load_options(path: &Path) -> anyhow::Result<GeneratorOptions> {
  let text = tokio::fs::read_to_string(path).await?;
  serde_json::from_str(&text)
    .map_err(|err| anyhow::anyhow!("Invalid configuration file '{}': {err}", path.display()))
}

/// Command-line flags win over the configuration file.
fn apply_overrides(mut options: GeneratorOptions, command: &GenerateCommand) -> GeneratorOptions {
  let strings = [
    (&command.model_prefix, &mut options.model_prefix),
    (&command.model_suffix, &mut options.model_suffix),
    (&command.service_prefix, &mut options.service_prefix),
    (&command.service_suffix, &mut options.service_suffix),
    (&command.default_tag, &mut options.default_tag),
  ];
  for (flag, target) in strings {
    if let Some(value) = flag {
      target.clone_from(value);
    }
  }

  if let Some(style) = command.enum_style {
    options.enum_style = style.into();
  }
  if !command.include_tags.is_empty() {
    options.include_tags.clone_from(&command.include_tags);
  }
  if !command.exclude_tags.is_empty() {
    options.exclude_tags.clone_from(&command.exclude_tags);
  }
  if !command.exclude_parameters.is_empty() {
    options.exclude_parameters.clone_from(&command.exclude_parameters);
  }
  if command.skip_json_suffix {
    options.skip_json_suffix = true;
  }
  if command.keep_unused_models {
    options.ignore_unused_models = false;
  }
  options
}

struct GenerateLogger<'a> {
  config: &'a GenerateConfig,
  colors: &'a Colors,
}

impl<'a> GenerateLogger<'a> {
  fn new(config: &'a GenerateConfig, colors: &'a Colors) -> Self {
    Self { config, colors }
  }

  fn info(&self, message: &str) {
    if !self.config.quiet {
      println!(
        "{} {}",
        format_timestamp().with(self.colors.text(Role::Timestamp)),
        message.with(self.colors.text(Role::Primary))
      );
    }
  }

  fn stat(&self, label: &str, value: String) {
    if !self.config.quiet {
      println!(
        "            {:<25} {}",
        label.with(self.colors.text(Role::Label)),
        value.with(self.colors.text(Role::Value))
      );
    }
  }

  fn print_statistics(&self, stats: &GenerationStats) {
    if self.config.quiet {
      return;
    }

    self.stat("Models built:", stats.models_built.to_string());
    self.stat("", format!("{} enums", stats.enums_built));
    if stats.models_pruned > 0 {
      self.stat("", format!("{} unused, pruned", stats.models_pruned));
    }
    self.stat("Operations built:", stats.operations_built.to_string());
    self.stat("", format!("{} variants", stats.variants_built));
    self.stat("Services built:", stats.services_built.to_string());
    if !stats.warnings.is_empty() {
      self.stat("Warnings:", stats.warnings.len().to_string());
    }

    self.print_warnings(stats);
  }

  /// Filtering notices only show up in verbose mode.
  fn print_warnings(&self, stats: &GenerationStats) {
    let visible = stats
      .warnings
      .iter()
      .filter(|warning| self.config.verbose || !warning.is_informational())
      .collect::<Vec<_>>();
    if visible.is_empty() {
      return;
    }

    println!();
    for warning in visible {
      let label = if warning.is_informational() { "Note:" } else { "Warning:" };
      eprintln!(
        "{} {}",
        label.with(self.colors.text(Role::Accent)),
        warning.to_string().with(self.colors.text(Role::Primary))
      );
    }
  }

  fn log_success(&self) {
    if !self.config.quiet {
      println!();
      println!(
        "{} {}",
        format_timestamp().with(self.colors.text(Role::Timestamp)),
        "Successfully generated the client model".with(self.colors.text(Role::Success))
      );
    }
  }
}

pub async fn generate_model(config: GenerateConfig, colors: &Colors) -> anyhow::Result<()> {
  let logger = GenerateLogger::new(&config, colors);

  logger.info(&format!("Loading OpenAPI description from: {}", config.input.display()));
  let description = SpecLoader::load(&config.input).await?;

  logger.info("Building generation model...");
  let output = Orchestrator::new(description, config.options.clone()).build()?;
  logger.print_statistics(&output.stats);

  logger.info(&format!("Writing to: {}", config.output.display()));
  config.write_output(&output).await?;

  logger.log_success();
  Ok(())
}

#[cfg(test)]
mod tests {
  use std::io::Write;

  use oas3_tsgen::generator::EnumStyle;

  use super::*;
  use crate::ui::cli::EnumStyleArg;

  #[test]
  fn test_apply_overrides_without_flags_keeps_options() {
    let base = GeneratorOptions::builder().model_prefix("Api").build();
    let result = apply_overrides(base.clone(), &GenerateCommand::default());
    assert_eq!(result, base);
  }

  #[test]
  fn test_apply_overrides_flags_win() {
    let base = GeneratorOptions::builder()
      .model_prefix("Api")
      .include_tags(vec!["pets".to_string()])
      .build();
    let command = GenerateCommand {
      model_prefix: Some("Dto".to_string()),
      service_suffix: Some("Client".to_string()),
      enum_style: Some(EnumStyleArg::Upper),
      exclude_tags: vec!["internal".to_string()],
      skip_json_suffix: true,
      keep_unused_models: true,
      ..GenerateCommand::default()
    };

    let result = apply_overrides(base, &command);

    assert_eq!(result.model_prefix, "Dto");
    assert_eq!(result.service_suffix, "Client");
    assert_eq!(result.enum_style, EnumStyle::Upper);
    assert_eq!(result.include_tags, vec!["pets".to_string()]);
    assert_eq!(result.exclude_tags, vec!["internal".to_string()]);
    assert!(result.skip_json_suffix);
    assert!(!result.ignore_unused_models);
  }

  #[tokio::test]
  async fn test_load_options_from_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(
      file,
      r#"{{"modelSuffix":"Model","enumStyle":"upper","excludeParameters":["X-Trace"]}}"#
    )
    .unwrap();

    let options = load_options(file.path()).await.unwrap();

    assert_eq!(options.model_suffix, "Model");
    assert_eq!(options.enum_style, EnumStyle::Upper);
    assert_eq!(options.exclude_parameters, vec!["X-Trace".to_string()]);
    assert_eq!(options.service_suffix, "Service");
    assert!(options.ignore_unused_models);
  }

  #[tokio::test]
  async fn test_load_options_rejects_invalid_file() {
    let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
    write!(file, r#"{{"enumStyle": 3}}"#).unwrap();

    let err = load_options(file.path()).await.unwrap_err();
    assert!(err.to_string().contains("Invalid configuration file"));
  }
}
