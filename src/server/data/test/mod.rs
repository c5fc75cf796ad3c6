mod gift_certificate;
mod order;
mod purchase;
mod tag;
mod user;

/// Builds raw query parameters as the search controllers receive them.
fn params(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
    pairs
        .iter()
        .map(|(key, value)| (key.to_string(), value.to_string()))
        .collect()
}
