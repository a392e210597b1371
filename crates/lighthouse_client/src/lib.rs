mod http_client;

pub(crate) mod host;

pub mod error;
pub mod resource;
pub use http_client::*;
pub use host::{HostInfo, ContainerSummary, ImageSummary};
