use ntex::http;

/// A non successful http response returned by the lighthouse backend
#[derive(Clone, Debug)]
pub struct HttpError {
  pub msg: String,
  pub status: http::StatusCode,
}

impl HttpError {
  pub fn new<T>(status: http::StatusCode, msg: T) -> Self
  where
    T: ToString,
  {
    Self {
      status,
      msg: msg.to_string(),
    }
  }

  /// Numeric status code, as reported in diagnostics
  pub fn code(&self) -> u16 {
    self.status.as_u16()
  }
}

impl std::fmt::Display for HttpError {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    if self.msg.is_empty() {
      return write!(f, "[{}]", self.status);
    }
    write!(f, "[{}] {}", self.status, self.msg)
  }
}

impl std::error::Error for HttpError {}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn display_includes_status() {
    let err = HttpError::new(
      http::StatusCode::INTERNAL_SERVER_ERROR,
      "daemon unreachable",
    );
    assert_eq!(err.code(), 500);
    assert_eq!(
      err.to_string(),
      "[500 Internal Server Error] daemon unreachable"
    );
    let err = HttpError::new(http::StatusCode::BAD_GATEWAY, "");
    assert_eq!(err.to_string(), "[502 Bad Gateway]");
  }
}
