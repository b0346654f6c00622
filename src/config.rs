use std::path::PathBuf;

use clap::Parser;
use thiserror::Error;
use tracing::warn;

use crate::palette::ColorError;
use crate::palette::Palette;
use crate::palette::parse_color;
use crate::rule::Rule;
use crate::rule::RuleError;

/// Draw the history of an elementary cellular automaton to a PNG.
#[derive(Parser, Debug)]
#[command(name = "wolfram", version)]
pub struct Args {
    /// Cellular automaton rule to generate, between 0 and 255
    #[arg(long, default_value = "110")]
    pub rule: String,

    /// Image width, which is also the number of cells
    #[arg(long, default_value_t = 1024)]
    pub width: u32,

    /// Image height, which is also the number of generations
    #[arg(long, default_value_t = 768)]
    pub height: u32,

    /// Image output file
    #[arg(long, default_value = "ca.png")]
    pub file: PathBuf,

    /// Foreground color, as six hex digits with an optional leading '#'
    #[arg(long, default_value = "9FEF00")]
    pub fg: String,

    /// Background color, as six hex digits with an optional leading '#'
    #[arg(long, default_value = "000000")]
    pub bg: String,

    /// Also print a braille preview of the pattern to stdout
    #[arg(long)]
    pub preview: bool,

    /// Log filter directive, e.g. "debug" or "wolfram=trace". Overrides RUST_LOG
    #[arg(long)]
    pub log_level: Option<String>,
}

/// Everything needed for a run, checked.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub rule: Rule,
    pub width: u32,
    pub height: u32,
    pub palette: Palette,
    pub file: PathBuf,
    pub preview: bool,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid rule: {0}")]
    Rule(#[from] RuleError),

    #[error("width must be positive")]
    ZeroWidth,

    #[error("invalid foreground color \"{got}\": {err}")]
    Foreground { got: String, err: ColorError },

    #[error("invalid background color \"{got}\": {err}")]
    Background { got: String, err: ColorError },
}

impl Args {
    /// Validate the raw arguments.
    pub fn into_config(self) -> Result<Config, ConfigError> {
        let rule: Rule = self.rule.parse()?;

        if self.width == 0 {
            return Err(ConfigError::ZeroWidth);
        }

        let fg = parse_color(&self.fg).map_err(|err| ConfigError::Foreground {
            got: self.fg.clone(),
            err,
        })?;
        let bg = parse_color(&self.bg).map_err(|err| ConfigError::Background {
            got: self.bg.clone(),
            err,
        })?;

        Ok(Config {
            rule,
            width: self.width,
            height: self.height,
            palette: Palette::new(fg, bg),
            file: self.file,
            preview: self.preview,
        })
    }
}

impl Config {
    /// Number of cells the preview can show, given `columns` braille characters per line.
    ///
    /// Each braille character holds two cells.
    pub fn preview_width(&self, columns: Option<usize>) -> usize {
        let width = self.width as usize;

        let Some(columns) = columns else {
            return width;
        };

        let max = 2 * columns;
        if width > max {
            warn!(width, max, "preview is cropped to the terminal width");
            max
        } else {
            width
        }
    }
}
