//! `Link` header parsing for Okta pagination
//!
//! Okta paginates with RFC 8288 style headers:
//!
//! ```text
//! Link: <https://acme.okta.com/api/v1/users?limit=200>; rel="self"
//! Link: <https://acme.okta.com/api/v1/users?after=00u1&limit=200>; rel="next"
//! ```

use reqwest::header::{HeaderMap, LINK};
use std::collections::HashMap;

/// Parse one `Link` header value into a relation -> URL map
///
/// Segments are separated by `,` and must have the form `<url>; rel="name"`.
/// Anything else is skipped.
pub fn parse_link_header(value: &str) -> HashMap<String, String> {
    let mut links = HashMap::new();

    for segment in value.split(',') {
        let parts: Vec<&str> = segment.split("; ").collect();
        if parts.len() != 2 {
            continue;
        }

        let href = parts[0].trim_matches(|c| c == '<' || c == '>' || c == ' ');
        let rel = parts[1].replace("rel=", "").replace('"', "");
        links.insert(rel.trim().to_string(), href.to_string());
    }

    links
}

/// Collect relations from every `Link` header on a response
pub fn links_from_headers(headers: &HeaderMap) -> HashMap<String, String> {
    headers
        .get_all(LINK)
        .iter()
        .filter_map(|value| value.to_str().ok())
        .flat_map(parse_link_header)
        .collect()
}

/// URL of the next page, if any
pub fn next_page(headers: &HeaderMap) -> Option<String> {
    links_from_headers(headers).remove("next")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::HeaderValue;

    #[test]
    fn test_parse_next_and_last() {
        let links = parse_link_header(
            r#"<https://a.example/users?after=1>; rel="next", <https://a.example/users?after=9>; rel="last""#,
        );
        assert_eq!(links.len(), 2);
        assert_eq!(links["next"], "https://a.example/users?after=1");
        assert_eq!(links["last"], "https://a.example/users?after=9");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let links = parse_link_header(r#"  <https://a.example/1>; rel="self" ,   <https://a.example/2>; rel="next"  "#);
        assert_eq!(links["self"], "https://a.example/1");
        assert_eq!(links["next"], "https://a.example/2");
    }

    #[test]
    fn test_parse_skips_malformed_segments() {
        let links = parse_link_header(r#"garbage, <https://a.example/2>; rel="next"; title="x""#);
        assert!(links.is_empty());
    }

    #[test]
    fn test_parse_empty() {
        assert!(parse_link_header("").is_empty());
    }

    #[test]
    fn test_links_from_multiple_headers() {
        let mut headers = HeaderMap::new();
        headers.append(
            LINK,
            HeaderValue::from_static(r#"<https://a.example/users?limit=200>; rel="self""#),
        );
        headers.append(
            LINK,
            HeaderValue::from_static(r#"<https://a.example/users?after=00u1&limit=200>; rel="next""#),
        );

        let links = links_from_headers(&headers);
        assert_eq!(links["self"], "https://a.example/users?limit=200");
        assert_eq!(
            next_page(&headers),
            Some("https://a.example/users?after=00u1&limit=200".to_string())
        );
    }

    #[test]
    fn test_no_next_page() {
        let mut headers = HeaderMap::new();
        headers.insert(
            LINK,
            HeaderValue::from_static(r#"<https://a.example/users?limit=200>; rel="self""#),
        );
        assert_eq!(next_page(&headers), None);
        assert_eq!(next_page(&HeaderMap::new()), None);
    }
}
