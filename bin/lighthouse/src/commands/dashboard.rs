use lighthouse_error::io::IoResult;
use lighthouse_client::resource::Resource;

use crate::error::CliError;
use crate::presenter::Presenter;
use crate::config::DashboardConfig;
use crate::utils::print::{render_json, render_table, render_yml};
use crate::models::{ContainerRow, DisplayFormat, ImageRow, ViewState};

const UNAVAILABLE: &str = "<unavailable>";

/// Function that execute when running `lighthouse`
/// Fetch the state of the host and print the dashboard.
/// Failed fetches only leave their panel empty.
pub async fn exec_dashboard(config: &DashboardConfig) -> Result<(), CliError> {
  log::debug!("Loading dashboard of {}", config.host);
  let mut presenter = Presenter::new(config.client.clone());
  presenter.activate().await;
  let state = presenter.into_state();
  for resource in Resource::ALL {
    if !state.is_populated(resource) {
      log::debug!("Panel {resource} left empty");
    }
  }
  let dashboard = render_dashboard(&state, config.display_format)?;
  print!("{dashboard}");
  Ok(())
}

pub fn render_dashboard(
  state: &ViewState,
  format: DisplayFormat,
) -> IoResult<String> {
  match format {
    DisplayFormat::Table => Ok(render_panels(state)),
    DisplayFormat::Yaml => render_yml(state),
    DisplayFormat::Json => render_json(state),
  }
}

fn render_panels(state: &ViewState) -> String {
  let info = state.info().unwrap_or(UNAVAILABLE).to_owned();
  let containers = match state.containers() {
    Some(containers) => {
      render_table(containers.iter().map(ContainerRow::from))
    }
    None => UNAVAILABLE.to_owned(),
  };
  let images = match state.images() {
    Some(images) => render_table(images.iter().map(ImageRow::from)),
    None => UNAVAILABLE.to_owned(),
  };
  format!(
    "=== [Host] ===\n{info}\n\n=== [Containers] ===\n{containers}\n\n=== [Images] ===\n{images}\n"
  )
}
