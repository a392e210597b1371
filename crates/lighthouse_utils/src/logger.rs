/// Initialize the logger of a lighthouse binary.
/// The filter is read from `LOG_LEVEL` and defaults to `{bin_name}=info`
/// so fetch diagnostics reach stderr without extra setup.
pub fn enable_logger(bin_name: &str) {
  if std::env::var("LOG_LEVEL").is_err() {
    std::env::set_var("LOG_LEVEL", format!("{bin_name}=info"));
  }
  let is_test = std::env::var("TEST").is_ok();
  let _ = env_logger::Builder::new()
    .parse_env("LOG_LEVEL")
    .is_test(is_test)
    .try_init();
}
