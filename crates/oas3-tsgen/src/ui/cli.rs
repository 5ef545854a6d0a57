use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use oas3_tsgen::generator::EnumStyle;

use super::colors::{ColorMode, ThemeMode};

#[derive(Parser, Debug)]
#[command(name = "oas3-tsgen")]
#[command(author, version, about = "OpenAPI 3 to TypeScript client generation model builder")]
pub struct Cli {
  #[command(subcommand)]
  pub command: Commands,

  /// Control color output
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub color: ColorMode,

  /// Terminal theme (dark or light background)
  #[arg(long, value_enum, default_value = "auto", global = true)]
  pub theme: ThemeMode,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
  /// List information derived from an OpenAPI description
  List {
    #[command(subcommand)]
    list_command: ListCommands,
  },
  /// Build the generation model and write it as JSON
  Generate(GenerateCommand),
}

#[derive(Args, Debug, Clone, Default)]
pub struct GenerateCommand {
  /// Path to the OpenAPI description (JSON or YAML)
  #[arg(short, long, value_name = "FILE")]
  pub input: PathBuf,

  /// Path where the generation model will be written
  #[arg(short, long, value_name = "FILE")]
  pub output: PathBuf,

  /// JSON file with generator options; flags below override it
  #[arg(short, long, value_name = "FILE")]
  pub config: Option<PathBuf>,

  #[arg(long, value_name = "PREFIX")]
  pub model_prefix: Option<String>,

  #[arg(long, value_name = "SUFFIX")]
  pub model_suffix: Option<String>,

  #[arg(long, value_name = "PREFIX")]
  pub service_prefix: Option<String>,

  #[arg(long, value_name = "SUFFIX")]
  pub service_suffix: Option<String>,

  /// How enum members are named
  #[arg(long, value_enum)]
  pub enum_style: Option<EnumStyleArg>,

  /// Only keep operations with these tags (comma-separated)
  #[arg(long, value_name = "TAGS", value_delimiter = ',')]
  pub include_tags: Vec<String>,

  /// Drop operations with these tags (comma-separated)
  #[arg(long, value_name = "TAGS", value_delimiter = ',')]
  pub exclude_tags: Vec<String>,

  /// Drop parameters with these names from every operation (comma-separated)
  #[arg(long, value_name = "NAMES", value_delimiter = ',')]
  pub exclude_parameters: Vec<String>,

  /// Do not suffix JSON variants with `$Json`
  #[arg(long, default_value_t = false)]
  pub skip_json_suffix: bool,

  /// Keep models that no service references
  #[arg(long, default_value_t = false)]
  pub keep_unused_models: bool,

  /// Tag assigned to operations without tags
  #[arg(long, value_name = "TAG")]
  pub default_tag: Option<String>,

  /// Enable verbose output with detailed progress information
  #[arg(short, long, default_value_t = false)]
  pub verbose: bool,

  /// Suppress non-essential output (errors only)
  #[arg(short, long, default_value_t = false)]
  pub quiet: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum EnumStyleArg {
  Upper,
  Pascal,
  Alias,
}

impl From<EnumStyleArg> for EnumStyle {
  fn from(value: EnumStyleArg) -> Self {
    match value {
      EnumStyleArg::Upper => Self::Upper,
      EnumStyleArg::Pascal => Self::Pascal,
      EnumStyleArg::Alias => Self::Alias,
    }
  }
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
  /// List operations with their ids and variants
  Operations {
    /// Path to the OpenAPI description (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
  /// List models with their kind and output file
  Models {
    /// Path to the OpenAPI description (JSON or YAML)
    #[arg(short, long, value_name = "FILE")]
    input: PathBuf,
  },
}
