//! Display formatting for analysis and audit views.

#[cfg(test)]
#[path = "format_test.rs"]
mod format_test;

/// Probability in `0.0..=1.0` as a percentage with one decimal, e.g. `87.3%`.
pub fn percent(probability: f64) -> String {
    format!("{:.1}%", probability * 100.0)
}

/// Split an ISO 8601 timestamp into `(YYYY-MM-DD, HH:MM)`.
///
/// Anything without a `T` separator is returned whole as the date.
pub fn split_timestamp(iso: &str) -> (String, String) {
    let Some((date, time)) = iso.split_once('T') else {
        return (iso.to_owned(), String::new());
    };
    let time = time.get(..5).unwrap_or(time);
    (date.to_owned(), time.to_owned())
}
