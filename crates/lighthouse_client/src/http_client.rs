use ntex::rt;
use ntex::http;

use lighthouse_error::io::{IoError, FromIo};
use lighthouse_error::http_client::HttpClientError;

use crate::error::is_api_error;

/// Origin used when no host is configured
pub const DEFAULT_HOST: &str = "http://localhost:8080";

/// Upper bound of a response body read by the client
const PAYLOAD_LIMIT: usize = 20_000_000;

#[derive(Clone, Debug)]
pub struct LighthouseClient {
  pub url: String,
  pub unix_socket: Option<String>,
}

impl std::fmt::Display for LighthouseClient {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match &self.unix_socket {
      Some(path) => write!(f, "unix://{path}"),
      None => write!(f, "{}", self.url),
    }
  }
}

impl LighthouseClient {
  pub fn connect_with_default() -> Self {
    LighthouseClient {
      url: DEFAULT_HOST.to_owned(),
      unix_socket: None,
    }
  }

  /// Build a client for the given origin.
  /// Accepts `http://`, `https://` and `unix://<socket path>` urls.
  pub fn connect_to(url: &str) -> Result<Self, IoError> {
    match url {
      url if url.starts_with("http://") || url.starts_with("https://") => {
        Ok(LighthouseClient {
          url: url.trim_end_matches('/').to_owned(),
          unix_socket: None,
        })
      }
      url if url.starts_with("unix://") => {
        let path = url.trim_start_matches("unix://");
        if path.is_empty() {
          return Err(IoError::invalid_input("Host", "missing socket path"));
        }
        Ok(LighthouseClient {
          url: "http://localhost".to_owned(),
          unix_socket: Some(path.to_owned()),
        })
      }
      _ => Err(IoError::invalid_input(
        "Host".to_owned(),
        format!("invalid url {url}, expected http://, https:// or unix://"),
      )),
    }
  }

  /// The response timeout is disabled, a request lasts as long as the transport
  fn gen_client(&self) -> http::client::Client {
    let mut client = http::client::Client::build();
    if let Some(unix_socket) = &self.unix_socket {
      let unix_socket = unix_socket.clone();
      client = client.connector(
        http::client::Connector::default()
          .connector(ntex::service::fn_service(move |_| {
            let unix_socket = unix_socket.clone();
            async { Ok::<_, _>(rt::unix_connect(unix_socket).await?) }
          }))
          .finish(),
      );
    }
    client.disable_timeout().finish()
  }

  fn send_error(
    &self,
    err: http::client::error::SendRequestError,
  ) -> HttpClientError {
    let url = if let Some(url) = &self.unix_socket {
      url
    } else {
      &self.url
    };
    HttpClientError::IoError(*err.map_err_context(|| url.to_owned()))
  }

  pub(crate) fn gen_url(&self, path: &str) -> String {
    format!("{}{path}", self.url)
  }

  fn get(&self, path: &str) -> http::client::ClientRequest {
    self.gen_client().get(self.gen_url(path))
  }

  /// Send a bare GET request, without body, query or custom header.
  /// Any non 2xx status is turned into an error.
  pub async fn send_get(
    &self,
    path: &str,
  ) -> Result<http::client::ClientResponse, HttpClientError> {
    log::debug!("GET {}", self.gen_url(path));
    let mut res = self
      .get(path)
      .send()
      .await
      .map_err(|err| self.send_error(err))?;
    let status = res.status();
    log::debug!("GET {} -> {status}", self.gen_url(path));
    is_api_error(&mut res, &status).await?;
    Ok(res)
  }

  pub async fn res_text(
    mut res: http::client::ClientResponse,
  ) -> Result<String, HttpClientError> {
    let body = res
      .body()
      .limit(PAYLOAD_LIMIT)
      .await
      .map_err(|err| err.map_err_context(|| "Read payload"))?;
    let text = String::from_utf8(body.to_vec())
      .map_err(|err| err.map_err_context(|| "Read payload"))?;
    Ok(text)
  }

  pub async fn res_json<R>(
    mut res: http::client::ClientResponse,
  ) -> Result<R, HttpClientError>
  where
    R: serde::de::DeserializeOwned,
  {
    let body = res
      .body()
      .limit(PAYLOAD_LIMIT)
      .await
      .map_err(|err| err.map_err_context(|| "Read payload"))?;
    let data = serde_json::from_slice::<R>(&body)
      .map_err(|err| err.map_err_context(|| "Decode payload"))?;
    Ok(data)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn connect_to_http() {
    let client = LighthouseClient::connect_to("http://127.0.0.1:8080/").unwrap();
    assert_eq!(client.url, "http://127.0.0.1:8080");
    assert!(client.unix_socket.is_none());
    assert_eq!(client.gen_url("/info"), "http://127.0.0.1:8080/info");
  }

  #[test]
  fn connect_to_unix() {
    let client =
      LighthouseClient::connect_to("unix:///run/lighthouse.sock").unwrap();
    assert_eq!(client.unix_socket.as_deref(), Some("/run/lighthouse.sock"));
    assert_eq!(client.to_string(), "unix:///run/lighthouse.sock");
    assert_eq!(client.gen_url("/images"), "http://localhost/images");
  }

  #[test]
  fn connect_to_rejects_unknown_scheme() {
    let err = LighthouseClient::connect_to("ftp://host").unwrap_err();
    assert_eq!(err.kind(), std::io::ErrorKind::InvalidInput);
    assert!(LighthouseClient::connect_to("unix://").is_err());
  }

  #[test]
  fn default_host() {
    let client = LighthouseClient::connect_with_default();
    assert_eq!(client.to_string(), DEFAULT_HOST);
  }
}
