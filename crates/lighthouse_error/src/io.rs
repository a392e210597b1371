/// An io error enriched with the context of the operation that failed.
/// Transport and decoding failures of the lighthouse client end up here.
#[derive(Debug)]
pub struct IoError {
  pub context: Option<String>,
  pub inner: std::io::Error,
}

pub type IoResult<T, E = IoError> = Result<T, E>;

impl IoError {
  pub fn new<T>(context: T, inner: std::io::Error) -> Self
  where
    T: Into<String>,
  {
    Self {
      context: Some(context.into()),
      inner,
    }
  }

  pub fn invalid_input<M>(context: M, message: M) -> Self
  where
    M: ToString + std::fmt::Display,
  {
    Self::new(
      context.to_string(),
      std::io::Error::new(
        std::io::ErrorKind::InvalidInput,
        message.to_string(),
      ),
    )
  }

  pub fn kind(&self) -> std::io::ErrorKind {
    self.inner.kind()
  }

  pub fn exit(&self) -> ! {
    std::process::exit(self.inner.raw_os_error().unwrap_or(1));
  }
}

impl std::fmt::Display for IoError {
  fn fmt(
    &self,
    f: &mut std::fmt::Formatter<'_>,
  ) -> Result<(), std::fmt::Error> {
    use std::io::ErrorKind::*;

    let mut message;
    let message = if self.inner.raw_os_error().is_some() {
      // OS messages carry a " (os error X)" suffix that differs per platform
      match self.inner.kind() {
        NotFound => "No such file or directory",
        PermissionDenied => "Permission denied",
        ConnectionRefused => "Connection refused",
        ConnectionReset => "Connection reset",
        ConnectionAborted => "Connection aborted",
        NotConnected => "Not connected",
        AddrNotAvailable => "Address not available",
        BrokenPipe => "Broken pipe",
        TimedOut => "Timed out",
        Interrupted => "Interrupted",
        UnexpectedEof => "Unexpected end of file",
        _ => {
          message = strip_errno(&self.inner);
          capitalize(&mut message);
          &message
        }
      }
    } else {
      message = self.inner.to_string();
      capitalize(&mut message);
      &message
    };
    if let Some(ctx) = &self.context {
      write!(f, "{ctx}: {message}")
    } else {
      write!(f, "{message}")
    }
  }
}

impl std::error::Error for IoError {}

fn capitalize(text: &mut str) {
  if let Some(first) = text.get_mut(..1) {
    first.make_ascii_uppercase();
  }
}

/// Strip the trailing " (os error XX)" from io error strings.
fn strip_errno(err: &std::io::Error) -> String {
  let mut msg = err.to_string();
  if let Some(pos) = msg.find(" (os error ") {
    msg.truncate(pos);
  }
  msg
}

/// Attach a context to a foreign error while converting it into an [`IoError`].
pub trait FromIo<T> {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> T
  where
    C: ToString + std::fmt::Display;
}

impl FromIo<Box<IoError>> for std::string::FromUtf8Error {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> Box<IoError>
  where
    C: ToString + std::fmt::Display,
  {
    Box::new(IoError {
      context: Some((context)().to_string()),
      inner: std::io::Error::new(std::io::ErrorKind::InvalidData, self),
    })
  }
}

impl From<Box<IoError>> for IoError {
  fn from(f: Box<IoError>) -> Self {
    *f
  }
}

#[cfg(feature = "serde_json")]
impl FromIo<Box<IoError>> for serde_json::Error {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> Box<IoError>
  where
    C: ToString + std::fmt::Display,
  {
    Box::new(IoError {
      context: Some((context)().to_string()),
      inner: std::io::Error::new(std::io::ErrorKind::InvalidData, self),
    })
  }
}

#[cfg(feature = "serde_yaml")]
impl FromIo<Box<IoError>> for serde_yaml::Error {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> Box<IoError>
  where
    C: ToString + std::fmt::Display,
  {
    Box::new(IoError {
      context: Some((context)().to_string()),
      inner: std::io::Error::new(std::io::ErrorKind::InvalidData, self),
    })
  }
}

#[cfg(feature = "ntex")]
impl FromIo<Box<IoError>> for ntex::http::client::error::SendRequestError {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> Box<IoError>
  where
    C: ToString + std::fmt::Display,
  {
    use ntex::http::client::error::{ConnectError, SendRequestError};

    let inner = match self {
      SendRequestError::Timeout => {
        std::io::Error::new(std::io::ErrorKind::TimedOut, format!("{self}"))
      }
      SendRequestError::Connect(err) => match err {
        ConnectError::Disconnected(_) => std::io::Error::new(
          std::io::ErrorKind::ConnectionAborted,
          format!("{err}"),
        ),
        _ => std::io::Error::new(
          std::io::ErrorKind::ConnectionRefused,
          format!("{err}"),
        ),
      },
      SendRequestError::Url(_) => {
        std::io::Error::new(std::io::ErrorKind::InvalidInput, format!("{self}"))
      }
      _ => {
        std::io::Error::new(std::io::ErrorKind::Interrupted, format!("{self}"))
      }
    };
    Box::new(IoError {
      context: Some((context)().to_string()),
      inner,
    })
  }
}

#[cfg(feature = "ntex")]
impl FromIo<Box<IoError>> for ntex::http::error::PayloadError {
  fn map_err_context<C>(self, context: impl FnOnce() -> C) -> Box<IoError>
  where
    C: ToString + std::fmt::Display,
  {
    Box::new(IoError {
      context: Some((context)().to_string()),
      inner: std::io::Error::new(
        std::io::ErrorKind::InvalidData,
        format!("{self}"),
      ),
    })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_with_context() {
    let err = IoError::invalid_input("Host", "expected a socket path");
    assert_eq!(err.to_string(), "Host: Expected a socket path");
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
  }

  #[test]
  fn display_normalizes_os_errors() {
    let err = IoError::new(
      "/run/lighthouse.sock",
      std::io::Error::from_raw_os_error(111),
    );
    if err.kind() == std::io::ErrorKind::ConnectionRefused {
      assert_eq!(err.to_string(), "/run/lighthouse.sock: Connection refused");
    }
    assert!(!err.to_string().contains("os error"));
  }

  #[test]
  fn utf8_error_is_invalid_data() {
    let err = String::from_utf8(vec![0xff, 0xfe])
      .unwrap_err()
      .map_err_context(|| "Read payload");
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidData);
    assert!(err.to_string().starts_with("Read payload: "));
  }
}
