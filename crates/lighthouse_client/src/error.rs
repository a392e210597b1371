use thiserror::Error;
use ntex::http::{StatusCode, client::ClientResponse};

use lighthouse_error::http::HttpError;
use lighthouse_error::http_client::HttpClientError;

use crate::resource::Resource;

/// A failed read of one backend resource
#[derive(Debug, Error)]
#[error("Error retrieving {}: {source}", .resource.label())]
pub struct FetchError {
  pub resource: Resource,
  pub source: HttpClientError,
}

impl FetchError {
  pub fn new(resource: Resource, source: HttpClientError) -> Self {
    Self { resource, source }
  }

  /// Status code of the failed response,
  /// `None` when the request never got one (refused connection, bad payload)
  pub fn status(&self) -> Option<u16> {
    self.source.status()
  }
}

/// Turn any non 2xx response into an [`HttpError`] carrying its status.
/// The body is used as the message when it can be read.
pub(crate) async fn is_api_error(
  res: &mut ClientResponse,
  status: &StatusCode,
) -> Result<(), HttpClientError> {
  if status.is_success() {
    return Ok(());
  }
  let body = res.body().await.unwrap_or_default();
  let msg = error_message(&body);
  Err(HttpError::new(*status, msg).into())
}

fn error_message(body: &[u8]) -> String {
  match serde_json::from_slice::<serde_json::Value>(body) {
    Ok(serde_json::Value::Object(obj)) => ["msg", "message", "Message"]
      .iter()
      .find_map(|key| obj.get(*key).and_then(|v| v.as_str()))
      .map(ToOwned::to_owned)
      .unwrap_or_else(|| String::from_utf8_lossy(body).trim().to_owned()),
    _ => String::from_utf8_lossy(body).trim().to_owned(),
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn error_message_prefers_json_fields() {
    assert_eq!(error_message(br#"{"msg":"no daemon"}"#), "no daemon");
    assert_eq!(error_message(br#"{"Message":"denied"}"#), "denied");
    assert_eq!(error_message(b"plain failure\n"), "plain failure");
    assert_eq!(error_message(b""), "");
  }

  #[test]
  fn fetch_error_display() {
    let err = FetchError::new(
      Resource::Images,
      HttpError::new(StatusCode::INTERNAL_SERVER_ERROR, "").into(),
    );
    assert_eq!(err.status(), Some(500));
    assert_eq!(
      err.to_string(),
      "Error retrieving host images: [500 Internal Server Error]"
    );
  }
}
