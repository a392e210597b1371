use tabled::Tabled;

use lighthouse_client::{ContainerSummary, ImageSummary};

use crate::utils::time::format_timestamp;

const NONE: &str = "<none>";

/// A row of the containers panel
#[derive(Debug, Tabled)]
#[tabled(rename_all = "UPPERCASE")]
pub struct ContainerRow {
  #[tabled(rename = "CONTAINER ID")]
  pub(crate) id: String,
  pub(crate) image: String,
  pub(crate) names: String,
  pub(crate) status: String,
  pub(crate) created: String,
}

/// A row of the images panel
#[derive(Debug, Tabled)]
#[tabled(rename_all = "UPPERCASE")]
pub struct ImageRow {
  pub(crate) repository: String,
  pub(crate) tag: String,
  #[tabled(rename = "IMAGE ID")]
  pub(crate) id: String,
  pub(crate) created: String,
  pub(crate) size: String,
}

fn str_field(value: &serde_json::Value, key: &str) -> String {
  value
    .get(key)
    .and_then(|v| v.as_str())
    .filter(|s| !s.is_empty())
    .unwrap_or(NONE)
    .to_owned()
}

fn short_id(value: &serde_json::Value) -> String {
  let id = str_field(value, "Id");
  if id == NONE {
    return id;
  }
  id.trim_start_matches("sha256:").chars().take(12).collect()
}

fn created(value: &serde_json::Value) -> String {
  match value.get("Created").and_then(|v| v.as_i64()) {
    Some(epoch) => format_timestamp(epoch),
    None => NONE.to_owned(),
  }
}

const GB: i64 = 1024 * 1024 * 1024;

fn convert_size(size: i64) -> String {
  if size >= GB {
    format!("{} GB", size / GB)
  } else {
    format!("{} MB", size / 1024 / 1024)
  }
}

impl From<&ContainerSummary> for ContainerRow {
  fn from(value: &ContainerSummary) -> Self {
    let names = value
      .get("Names")
      .and_then(|v| v.as_array())
      .map(|names| {
        names
          .iter()
          .filter_map(|name| name.as_str())
          .map(|name| name.trim_start_matches('/'))
          .collect::<Vec<_>>()
          .join(",")
      })
      .filter(|names| !names.is_empty())
      .unwrap_or_else(|| NONE.to_owned());
    Self {
      id: short_id(value),
      image: str_field(value, "Image"),
      names,
      status: str_field(value, "Status"),
      created: created(value),
    }
  }
}

impl From<&ImageSummary> for ImageRow {
  fn from(value: &ImageSummary) -> Self {
    let repo_tag = value
      .get("RepoTags")
      .and_then(|v| v.as_array())
      .and_then(|tags| tags.first())
      .and_then(|tag| tag.as_str())
      .unwrap_or(NONE);
    // Registry hosts may carry a port, the tag is after the last colon
    let (repository, tag) = match repo_tag.rsplit_once(':') {
      Some((repository, tag)) if !tag.contains('/') => (repository, tag),
      _ => (repo_tag, NONE),
    };
    let size = match value.get("Size").and_then(|v| v.as_i64()) {
      Some(size) => convert_size(size),
      None => NONE.to_owned(),
    };
    Self {
      repository: repository.to_owned(),
      tag: tag.to_owned(),
      id: short_id(value),
      created: created(value),
      size,
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn container_row() {
    let container = serde_json::json!({
      "Id": "8dfafdbc3a40aa4f4e4bb4a6d5c4b0c0",
      "Names": ["/web", "/proxy/web"],
      "Image": "nginx:1.25",
      "Status": "Up 2 hours",
      "Created": 1_700_000_000,
    });
    let row = ContainerRow::from(&container);
    assert_eq!(row.id, "8dfafdbc3a40");
    assert_eq!(row.names, "web,proxy/web");
    assert_eq!(row.image, "nginx:1.25");
    assert_eq!(row.status, "Up 2 hours");
    assert_eq!(row.created, format_timestamp(1_700_000_000));
  }

  #[test]
  fn container_row_missing_fields() {
    let row = ContainerRow::from(&serde_json::json!({}));
    assert_eq!(row.id, NONE);
    assert_eq!(row.names, NONE);
    assert_eq!(row.created, NONE);
  }

  #[test]
  fn image_row() {
    let image = serde_json::json!({
      "Id": "sha256:3f57d9401f8d42f986df300f0c69192fc41da28ccc8d797829467780db3dd741",
      "RepoTags": ["registry.local:5000/busybox:1.36"],
      "Size": 4_261_550,
      "Created": 1_690_000_000,
    });
    let row = ImageRow::from(&image);
    assert_eq!(row.repository, "registry.local:5000/busybox");
    assert_eq!(row.tag, "1.36");
    assert_eq!(row.id, "3f57d9401f8d");
    assert_eq!(row.size, "4 MB");
  }

  #[test]
  fn image_row_untagged() {
    let row = ImageRow::from(&serde_json::json!({
      "Id": "sha256:abc",
      "RepoTags": [],
      "Size": 2_000_000_000_i64,
    }));
    assert_eq!(row.repository, NONE);
    assert_eq!(row.tag, NONE);
    assert_eq!(row.id, "abc");
    assert_eq!(row.size, "1 GB");
  }

  #[test]
  fn image_size_unit_boundary() {
    let size_of = |size: i64| {
      ImageRow::from(&serde_json::json!({ "Size": size })).size
    };
    assert_eq!(size_of(999_999_999), "953 MB");
    assert_eq!(size_of(1_000_000_000), "953 MB");
    assert_eq!(size_of(1_073_741_823), "1023 MB");
    assert_eq!(size_of(1_073_741_824), "1 GB");
  }
}
