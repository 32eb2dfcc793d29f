use std::path::PathBuf;

use clap::Parser;

use crate::utils::version;

#[derive(Parser, Debug)]
#[command(author, version = version(), about)]
pub struct Cli {
  /// Tick rate, i.e. number of ticks per second
  #[arg(short, long, value_name = "FLOAT", default_value_t = 4.0)]
  pub tick_rate: f64,

  /// Frame rate, i.e. number of frames per second
  #[arg(short, long, value_name = "FLOAT", default_value_t = 60.0)]
  pub frame_rate: f64,

  /// JSON or JSON5 file holding an array of user records. Replaces the configured users.
  #[arg(short, long, value_name = "PATH")]
  pub users: Option<PathBuf>,
}
