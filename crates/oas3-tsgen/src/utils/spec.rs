use std::{ffi::OsStr, path::Path};

use fmmap::tokio::{AsyncMmapFile, AsyncMmapFileExt};

use crate::generator::description::ApiDescription;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpecFormat {
  #[default]
  Json,
  Yaml,
}

impl SpecFormat {
  #[must_use]
  pub fn from_extension(ext: &str) -> Self {
    match ext.to_ascii_lowercase().as_str() {
      "yaml" | "yml" => Self::Yaml,
      _ => Self::Json,
    }
  }
}

/// Memory-maps a description file and parses it as JSON or YAML depending on its extension.
pub struct SpecLoader {
  file: AsyncMmapFile,
  format: SpecFormat,
}

impl SpecLoader {
  pub async fn open(path: &Path) -> anyhow::Result<Self> {
    let format = path
      .extension()
      .and_then(OsStr::to_str)
      .map_or(SpecFormat::default(), SpecFormat::from_extension);

    let file = AsyncMmapFile::open(path).await?;

    Ok(Self { file, format })
  }

  #[must_use]
  pub fn format(&self) -> SpecFormat {
    self.format
  }

  pub fn parse(&self) -> anyhow::Result<ApiDescription> {
    match self.format {
      SpecFormat::Json => Ok(ApiDescription::from_json_slice(self.file.as_slice())?),
      SpecFormat::Yaml => {
        let content = std::str::from_utf8(self.file.as_slice())?;
        Ok(ApiDescription::from_yaml(content)?)
      }
    }
  }

  pub async fn load(path: &Path) -> anyhow::Result<ApiDescription> {
    Self::open(path).await?.parse()
  }
}
