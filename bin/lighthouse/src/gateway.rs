use lighthouse_client::LighthouseClient;
use lighthouse_client::error::FetchError;
use lighthouse_client::{HostInfo, ContainerSummary, ImageSummary};

/// Remote reads the dashboard depends on.
/// Each call performs one round trip and reports failures through `Err`.
pub trait HostGateway {
  async fn fetch_host_info(&self) -> Result<HostInfo, FetchError>;

  async fn fetch_containers(&self) -> Result<Vec<ContainerSummary>, FetchError>;

  async fn fetch_images(&self) -> Result<Vec<ImageSummary>, FetchError>;
}

impl HostGateway for LighthouseClient {
  async fn fetch_host_info(&self) -> Result<HostInfo, FetchError> {
    LighthouseClient::fetch_host_info(self).await
  }

  async fn fetch_containers(&self) -> Result<Vec<ContainerSummary>, FetchError> {
    LighthouseClient::fetch_containers(self).await
  }

  async fn fetch_images(&self) -> Result<Vec<ImageSummary>, FetchError> {
    LighthouseClient::fetch_images(self).await
  }
}
