use lighthouse_error::http_client::HttpClientError;

use crate::error::FetchError;
use crate::resource::Resource;
use crate::http_client::LighthouseClient;

/// Host information as reported by the backend, structure left to the daemon
pub type HostInfo = serde_json::Value;
/// One entry of `GET /containers`
pub type ContainerSummary = serde_json::Value;
/// One entry of `GET /images`
pub type ImageSummary = serde_json::Value;

/// Text that looks like json is decoded, anything else is kept as a string
fn decode_text_payload(text: String) -> HostInfo {
  serde_json::from_str::<HostInfo>(&text)
    .unwrap_or(serde_json::Value::String(text))
}

impl LighthouseClient {
  /// ## Fetch host info
  ///
  /// Read `GET /info` as raw text.
  /// A json body is returned as structured data,
  /// any other body is returned as a json string.
  ///
  /// ## Example
  ///
  /// ```no_run,ignore
  /// use lighthouse_client::LighthouseClient;
  ///
  /// let client = LighthouseClient::connect_with_default();
  /// let info = client.fetch_host_info().await?;
  /// ```
  ///
  pub async fn fetch_host_info(&self) -> Result<HostInfo, FetchError> {
    let resource = Resource::Info;
    let text = self
      .read_text(resource)
      .await
      .map_err(|err| FetchError::new(resource, err))?;
    Ok(decode_text_payload(text))
  }

  /// ## Fetch containers
  ///
  /// List the containers of the host with `GET /containers`
  ///
  pub async fn fetch_containers(
    &self,
  ) -> Result<Vec<ContainerSummary>, FetchError> {
    self.read_list(Resource::Containers).await
  }

  /// ## Fetch images
  ///
  /// List the images of the host with `GET /images`
  ///
  pub async fn fetch_images(&self) -> Result<Vec<ImageSummary>, FetchError> {
    self.read_list(Resource::Images).await
  }

  async fn read_text(
    &self,
    resource: Resource,
  ) -> Result<String, HttpClientError> {
    let res = self.send_get(resource.path()).await?;
    Self::res_text(res).await
  }

  async fn read_list(
    &self,
    resource: Resource,
  ) -> Result<Vec<serde_json::Value>, FetchError> {
    let res = self
      .send_get(resource.path())
      .await
      .map_err(|err| FetchError::new(resource, err))?;
    Self::res_json::<Vec<serde_json::Value>>(res)
      .await
      .map_err(|err| FetchError::new(resource, err))
  }
}
