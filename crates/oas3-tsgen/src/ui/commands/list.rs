use std::path::Path;

use comfy_table::{Attribute, Cell, CellAlignment, ContentArrangement, Row, Table};
use itertools::Itertools;
use oas3_tsgen::{
  generator::{
    GeneratorOptions,
    orchestrator::{GenerationModel, Orchestrator},
  },
  utils::SpecLoader,
};

use crate::ui::{Colors, colors::Role, term_width};

async fn build_model(input: &Path, options: GeneratorOptions) -> anyhow::Result<GenerationModel> {
  let description = SpecLoader::load(input).await?;
  Ok(Orchestrator::new(description, options).build()?.model)
}

fn new_table(colors: &Colors, headers: &[&str]) -> Table {
  let mut table = Table::new();
  table
    .load_preset("  ── ──            ")
    .set_content_arrangement(ContentArrangement::Dynamic)
    .set_width(term_width());

  let mut row = Row::new();
  for header in headers {
    row.add_cell(Cell::new(header).fg(colors.cell(Role::Label)));
  }
  table.set_header(row);
  table
}

pub async fn list_operations(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let model = build_model(input, GeneratorOptions::default()).await?;
  let mut table = new_table(colors, &["OPERATION ID", "METHOD", "PATH", "TAGS", "VARIANTS"]);

  for operation in model.operations().values() {
    let variants = operation
      .variants
      .iter()
      .map(|variant| variant.method_name.as_str())
      .join(", ");

    let mut row = Row::new();
    row.add_cell(
      Cell::new(&operation.id)
        .fg(colors.cell(Role::Value))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(
      Cell::new(operation.method.as_str())
        .fg(colors.cell(Role::Accent))
        .set_alignment(CellAlignment::Right),
    );
    row.add_cell(Cell::new(&operation.path).fg(colors.cell(Role::Primary)));
    row.add_cell(Cell::new(operation.tags.join(", ")));
    row.add_cell(Cell::new(variants));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}

/// Lists every model, including ones no service uses.
pub async fn list_models(input: &Path, colors: &Colors) -> anyhow::Result<()> {
  let options = GeneratorOptions::builder().ignore_unused_models(false).build();
  let model = build_model(input, options).await?;
  let mut table = new_table(colors, &["MODEL", "TYPE NAME", "KIND", "FILE"]);

  for entry in model.models().values() {
    let kind = match (entry.is_enum, entry.is_simple) {
      (true, _) => "enum",
      (false, true) => "alias",
      (false, false) => "object",
    };

    let mut row = Row::new();
    row.add_cell(
      Cell::new(&entry.identity.name)
        .fg(colors.cell(Role::Value))
        .add_attribute(Attribute::Bold),
    );
    row.add_cell(Cell::new(&entry.identity.qualified_name).fg(colors.cell(Role::Primary)));
    row.add_cell(Cell::new(kind).fg(colors.cell(Role::Accent)));
    row.add_cell(Cell::new(&entry.identity.file_name));
    table.add_row(row);
  }

  println!("{table}");
  Ok(())
}
