use serde::Serialize;

use lighthouse_client::error::FetchError;
use lighthouse_client::resource::Resource;
use lighthouse_client::{ContainerSummary, ImageSummary};

/// What the dashboard renders.
/// Every field starts absent and is only ever written by the presenter,
/// a failed fetch leaves its field untouched.
#[derive(Clone, Debug, Default, PartialEq, Serialize)]
pub struct ViewState {
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) info: Option<String>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) containers: Option<Vec<ContainerSummary>>,
  #[serde(skip_serializing_if = "Option::is_none")]
  pub(crate) images: Option<Vec<ImageSummary>>,
}

impl ViewState {
  /// Host information, already formatted for display
  pub fn info(&self) -> Option<&str> {
    self.info.as_deref()
  }

  pub fn containers(&self) -> Option<&[ContainerSummary]> {
    self.containers.as_deref()
  }

  pub fn images(&self) -> Option<&[ImageSummary]> {
    self.images.as_deref()
  }

  pub fn is_populated(&self, resource: Resource) -> bool {
    match resource {
      Resource::Info => self.info.is_some(),
      Resource::Containers => self.containers.is_some(),
      Resource::Images => self.images.is_some(),
    }
  }
}

/// Record emitted when a resource could not be fetched
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
  pub resource: Resource,
  /// `None` when no response was received
  pub status: Option<u16>,
  pub detail: String,
}

impl From<&FetchError> for Diagnostic {
  fn from(err: &FetchError) -> Self {
    Self {
      resource: err.resource,
      status: err.status(),
      detail: err.source.to_string(),
    }
  }
}

impl std::fmt::Display for Diagnostic {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    match self.status {
      Some(status) => write!(
        f,
        "Error retrieving {} -> status: {status}",
        self.resource.label()
      ),
      None => write!(
        f,
        "Error retrieving {} -> status: none ({})",
        self.resource.label(),
        self.detail
      ),
    }
  }
}
