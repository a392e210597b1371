use chrono::{DateTime, Local, TimeZone};

/// Format a unix timestamp as `M/D/YYYY H:MM:SS` in the local time zone.
/// An epoch chrono cannot represent gives an empty string.
pub fn format_timestamp(epoch_seconds: i64) -> String {
  match Local.timestamp_opt(epoch_seconds, 0).single() {
    Some(date) => format_datetime(&date),
    None => String::new(),
  }
}

pub fn format_datetime<Tz>(date: &DateTime<Tz>) -> String
where
  Tz: TimeZone,
  Tz::Offset: std::fmt::Display,
{
  date.format("%-m/%-d/%Y %-H:%M:%S").to_string()
}

#[cfg(test)]
mod tests {
  use super::*;

  use chrono::{Datelike, FixedOffset, Utc};

  #[test]
  fn format_fixed_instants() {
    let date = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
    assert_eq!(format_datetime(&date), "11/14/2023 22:13:20");
    let date = Utc.timestamp_opt(946_688_461, 0).unwrap();
    assert_eq!(format_datetime(&date), "1/1/2000 1:01:01");
    let offset = FixedOffset::east_opt(2 * 3600).unwrap();
    let date = offset.timestamp_opt(946_688_461, 0).unwrap();
    assert_eq!(format_datetime(&date), "1/1/2000 3:01:01");
  }

  /// The argument is authoritative, the current time is never used
  #[test]
  fn format_timestamp_uses_its_argument() {
    let formatted = format_timestamp(0);
    let year = Local.timestamp_opt(0, 0).unwrap().year();
    assert!(year == 1969 || year == 1970);
    assert!(formatted.contains(&format!("/{year} ")), "{formatted}");
    assert_eq!(format_timestamp(1_700_000_000), format_timestamp(1_700_000_000));
    assert_ne!(format_timestamp(0), format_timestamp(1_700_000_000));
  }

  #[test]
  fn format_timestamp_out_of_range() {
    assert_eq!(format_timestamp(i64::MAX), "");
  }
}
