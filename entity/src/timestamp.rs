use chrono::Utc;

const FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

/// Current UTC time as an ISO-8601 string without offset, e.g.
/// `2016-05-04T13:02:11.482113`.
pub fn make_timestamp() -> String {
    Utc::now().naive_utc().format(FORMAT).to_string()
}
