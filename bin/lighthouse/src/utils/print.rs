use tabled::Table;
use tabled::settings::object::Segment;
use tabled::settings::{Style, Modify, Padding, Alignment};

use lighthouse_error::io::{IoResult, FromIo};

pub fn render_table<T>(iter: impl IntoIterator<Item = T>) -> String
where
  T: tabled::Tabled,
{
  Table::new(iter)
    .with(Style::empty())
    .with(
      Modify::new(Segment::all())
        .with(Padding::new(0, 4, 0, 0))
        .with(Alignment::left()),
    )
    .to_string()
}

pub fn render_yml<T>(data: &T) -> IoResult<String>
where
  T: serde::Serialize,
{
  let yml = serde_yaml::to_string(data)
    .map_err(|err| err.map_err_context(|| "Print yaml"))?;
  Ok(yml)
}

pub fn render_json<T>(data: &T) -> IoResult<String>
where
  T: serde::Serialize,
{
  let json = serde_json::to_string_pretty(data)
    .map_err(|err| err.map_err_context(|| "Print json"))?;
  Ok(format!("{json}\n"))
}
