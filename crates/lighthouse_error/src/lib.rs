#[cfg(feature = "io")]
pub mod io;

#[cfg(feature = "http")]
pub mod http;

#[cfg(feature = "http_client")]
pub mod http_client;
