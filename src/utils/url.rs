//! Joining the configured service address with endpoint paths.

/// Strip trailing slashes so endpoint joins never produce `//`.
///
/// ```
/// use warehouse_chat::utils::url::normalize_base_url;
///
/// assert_eq!(normalize_base_url("http://localhost:8000/"), "http://localhost:8000");
/// ```
pub fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}

/// Build the full URL for `endpoint` under `base_url`.
///
/// ```
/// use warehouse_chat::utils::url::construct_api_url;
///
/// assert_eq!(
///     construct_api_url("http://localhost:8000/", "/query"),
///     "http://localhost:8000/query"
/// );
/// ```
pub fn construct_api_url(base_url: &str, endpoint: &str) -> String {
    let endpoint = endpoint.trim_start_matches('/');
    format!("{}/{}", normalize_base_url(base_url), endpoint)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_trailing_slashes_and_whitespace() {
        assert_eq!(normalize_base_url("http://wh.local"), "http://wh.local");
        assert_eq!(normalize_base_url("http://wh.local///"), "http://wh.local");
        assert_eq!(normalize_base_url(" http://wh.local/api/ "), "http://wh.local/api");
        assert_eq!(normalize_base_url("///"), "");
    }

    #[test]
    fn joins_query_endpoint() {
        for base in ["http://wh.local/api", "http://wh.local/api/"] {
            for endpoint in ["query", "/query", "///query"] {
                assert_eq!(
                    construct_api_url(base, endpoint),
                    "http://wh.local/api/query",
                    "base={base:?} endpoint={endpoint:?}"
                );
            }
        }
    }
}
