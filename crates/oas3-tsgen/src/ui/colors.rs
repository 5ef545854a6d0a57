use std::io::IsTerminal;

use clap::ValueEnum;
use comfy_table::Color as CellColor;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ColorMode {
  Always,
  Auto,
  Never,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ThemeMode {
  Dark,
  Light,
  Auto,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
  Dark,
  Light,
}

/// What a piece of output means; each theme maps roles to colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
  Timestamp,
  Primary,
  Accent,
  Label,
  Value,
  Success,
}

impl Theme {
  const fn rgb(self, role: Role) -> (u8, u8, u8) {
    match (self, role) {
      (Self::Dark, Role::Timestamp | Role::Success) => (118, 166, 166),
      (Self::Dark, Role::Primary) => (191, 126, 4),
      (Self::Dark, Role::Accent) => (166, 84, 55),
      (Self::Dark, Role::Label) => (217, 164, 4),
      (Self::Dark, Role::Value) => (242, 211, 56),
      (Self::Light, Role::Timestamp) => (92, 62, 38),
      (Self::Light, Role::Primary) => (70, 42, 25),
      (Self::Light, Role::Accent) => (211, 99, 70),
      (Self::Light, Role::Label) => (176, 103, 66),
      (Self::Light, Role::Value) => (199, 146, 76),
      (Self::Light, Role::Success) => (34, 142, 90),
    }
  }
}

#[derive(Debug, Clone, Copy)]
pub struct Colors {
  enabled: bool,
  theme: Theme,
}

impl Colors {
  pub const fn new(enabled: bool, theme: Theme) -> Self {
    Self { enabled, theme }
  }

  pub const fn text(&self, role: Role) -> Color {
    if !self.enabled {
      return Color::Reset;
    }
    let (r, g, b) = self.theme.rgb(role);
    Color::Rgb { r, g, b }
  }

  pub const fn cell(&self, role: Role) -> CellColor {
    if !self.enabled {
      return CellColor::Reset;
    }
    let (r, g, b) = self.theme.rgb(role);
    CellColor::Rgb { r, g, b }
  }
}

pub fn colors_enabled(mode: ColorMode) -> bool {
  match mode {
    ColorMode::Always => true,
    ColorMode::Never => false,
    ColorMode::Auto => std::io::stdout().is_terminal(),
  }
}

pub fn detect_theme(mode: ThemeMode) -> Theme {
  match mode {
    ThemeMode::Dark => Theme::Dark,
    ThemeMode::Light => Theme::Light,
    ThemeMode::Auto => theme_from_env(),
  }
}

/// `COLORFGBG` is `fg;bg`; a background index of 8 or more is a light palette.
fn theme_from_env() -> Theme {
  if let Ok(colorfgbg) = std::env::var("COLORFGBG")
    && let Some(bg) = colorfgbg.split(';').next_back()
    && let Ok(bg) = bg.parse::<u8>()
    && bg >= 8
  {
    return Theme::Light;
  }
  Theme::Dark
}
