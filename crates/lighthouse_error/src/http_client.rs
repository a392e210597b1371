use super::io::IoError;
use super::http::HttpError;

/// Failure of a request sent by the lighthouse client.
/// Only [`HttpClientError::HttpError`] carries a status code,
/// transport and decoding failures never reached a valid response.
#[derive(Debug)]
pub enum HttpClientError {
  IoError(IoError),
  HttpError(HttpError),
}

impl HttpClientError {
  /// Status code reported by the backend, if any
  pub fn status(&self) -> Option<u16> {
    match self {
      HttpClientError::IoError(_) => None,
      HttpClientError::HttpError(err) => Some(err.code()),
    }
  }
}

impl std::fmt::Display for HttpClientError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self {
      HttpClientError::IoError(err) => write!(f, "{err}"),
      HttpClientError::HttpError(err) => write!(f, "{err}"),
    }
  }
}

impl std::error::Error for HttpClientError {}

impl From<Box<IoError>> for HttpClientError {
  fn from(f: Box<IoError>) -> Self {
    Self::IoError(*f)
  }
}

impl From<HttpError> for HttpClientError {
  fn from(f: HttpError) -> Self {
    Self::HttpError(f)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  use ntex::http::StatusCode;

  #[test]
  fn status_only_for_http_errors() {
    let err: HttpClientError =
      HttpError::new(StatusCode::NOT_FOUND, "no such route").into();
    assert_eq!(err.status(), Some(404));
    assert_eq!(err.to_string(), "[404 Not Found] no such route");
    let err: HttpClientError = Box::new(IoError::new(
      "http://localhost:8080",
      std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused"),
    ))
    .into();
    assert_eq!(err.status(), None);
  }
}
