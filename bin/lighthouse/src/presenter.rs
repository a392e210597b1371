use serde::Serialize;

use lighthouse_client::HostInfo;
use lighthouse_client::error::FetchError;

use crate::gateway::HostGateway;
use crate::models::{ViewState, Diagnostic};

/// Serialize host info as json indented with a single space
pub fn format_host_info(info: &HostInfo) -> String {
  let mut buf = Vec::new();
  let formatter = serde_json::ser::PrettyFormatter::with_indent(b" ");
  let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
  if info.serialize(&mut ser).is_err() {
    return info.to_string();
  }
  String::from_utf8(buf).unwrap_or_else(|_| info.to_string())
}

/// Write a successful payload into its field,
/// or leave the field untouched and report the failure.
fn bind<T>(
  field: &mut Option<T>,
  outcome: Result<T, FetchError>,
) -> Option<Diagnostic> {
  match outcome {
    Ok(payload) => {
      *field = Some(payload);
      None
    }
    Err(err) => {
      let diagnostic = Diagnostic::from(&err);
      log::error!("{diagnostic}");
      log::debug!("{err}");
      Some(diagnostic)
    }
  }
}

/// Fetch the host state through a gateway and project it into a [`ViewState`]
pub struct Presenter<G> {
  gateway: G,
  state: ViewState,
}

impl<G> Presenter<G>
where
  G: HostGateway,
{
  pub fn new(gateway: G) -> Self {
    Self {
      gateway,
      state: ViewState::default(),
    }
  }

  pub fn state(&self) -> &ViewState {
    &self.state
  }

  pub fn into_state(self) -> ViewState {
    self.state
  }

  /// Issue the three reads at once and bind each one as soon as it completes.
  /// Returns the diagnostics of the reads that failed, in no particular order
  /// relative to completion.
  pub async fn activate(&mut self) -> Vec<Diagnostic> {
    let gateway = &self.gateway;
    let ViewState {
      info,
      containers,
      images,
    } = &mut self.state;
    let (info, containers, images) = futures::join!(
      async move {
        let outcome = gateway.fetch_host_info().await;
        bind(info, outcome.map(|payload| format_host_info(&payload)))
      },
      async move { bind(containers, gateway.fetch_containers().await) },
      async move { bind(images, gateway.fetch_images().await) },
    );
    [info, containers, images].into_iter().flatten().collect()
  }
}
