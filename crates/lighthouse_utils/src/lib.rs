#[cfg(feature = "logger")]
pub mod logger;

#[cfg(feature = "ntex_test_server")]
pub mod ntex;
