use thiserror::Error;

use lighthouse_error::io::IoError;

/// Errors that stop the dashboard.
/// Failed fetches are not part of it, they only leave a panel empty.
#[derive(Debug, Error)]
pub enum CliError {
  #[error(transparent)]
  Io(#[from] IoError),
}

impl From<Box<IoError>> for CliError {
  fn from(err: Box<IoError>) -> Self {
    CliError::Io(*err)
  }
}

impl CliError {
  pub fn exit(&self) -> ! {
    match self {
      CliError::Io(err) => {
        eprintln!("{err}");
        err.exit()
      }
    }
  }
}
