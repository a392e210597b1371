mod dashboard;
mod view_state;

use clap::{Parser, ValueEnum};
use serde::{Serialize, Deserialize};

pub use dashboard::*;
pub use view_state::*;

/// Dashboard of a Docker host: daemon info, containers and images
#[derive(Debug, Parser)]
#[clap(about, version, name = "lighthouse")]
pub struct Cli {
  /// Lighthouse host, `http://`, `https://` or `unix://` url
  #[clap(long, short = 'H', env = "LIGHTHOUSE_HOST")]
  pub host: Option<String>,
  /// Output format of the dashboard
  #[clap(long, short = 'o', value_enum)]
  pub output: Option<DisplayFormat>,
}

/// How the dashboard is printed
#[derive(
  Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum DisplayFormat {
  #[default]
  Table,
  Yaml,
  Json,
}
