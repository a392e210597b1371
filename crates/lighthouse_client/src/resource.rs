/// Remote resources exposed by the lighthouse backend
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Resource {
  Info,
  Containers,
  Images,
}

impl Resource {
  pub const ALL: [Resource; 3] =
    [Resource::Info, Resource::Containers, Resource::Images];

  /// Path of the resource relative to the backend origin
  pub fn path(&self) -> &'static str {
    match self {
      Resource::Info => "/info",
      Resource::Containers => "/containers",
      Resource::Images => "/images",
    }
  }

  /// Fixed human readable label used in diagnostics
  pub fn label(&self) -> &'static str {
    match self {
      Resource::Info => "host information",
      Resource::Containers => "host containers",
      Resource::Images => "host images",
    }
  }

  pub fn name(&self) -> &'static str {
    match self {
      Resource::Info => "info",
      Resource::Containers => "containers",
      Resource::Images => "images",
    }
  }
}

impl std::fmt::Display for Resource {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    write!(f, "{}", self.name())
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn paths_and_labels() {
    let paths: Vec<_> = Resource::ALL.iter().map(Resource::path).collect();
    assert_eq!(paths, ["/info", "/containers", "/images"]);
    assert_eq!(Resource::Images.label(), "host images");
    assert_eq!(Resource::Containers.to_string(), "containers");
  }
}
