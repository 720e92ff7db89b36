/// Join the configured API base URL and an endpoint path.
///
/// The base may or may not carry a trailing slash; paths always start with
/// one.
pub fn api_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}
