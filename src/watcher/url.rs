use url::Url;

/// Accept only absolute `scheme://host...` text
///
/// `url` is lenient with special schemes (`http:example.com` gets a host), so
/// the `://` separator is also required literally.
pub fn is_valid_url(text: &str) -> bool {
    let Ok(url) = Url::parse(text) else {
        return false;
    };

    let has_authority = text
        .get(url.scheme().len()..)
        .is_some_and(|rest| rest.starts_with("://"));

    has_authority && url.host_str().is_some_and(|host| !host.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_accepts_web_urls() {
        assert!(is_valid_url("https://example.com/video"));
        assert!(is_valid_url("http://localhost:8080"));
        assert!(is_valid_url("HTTPS://Example.com/watch?v=abc"));
        assert!(is_valid_url("ftp://user@files.example.org/a.txt"));
    }

    #[test]
    fn test_rejects_plain_text() {
        assert!(!is_valid_url("not a url"));
        assert!(!is_valid_url(""));
        assert!(!is_valid_url("example.com/video"));
        assert!(!is_valid_url("/usr/local/bin"));
    }

    #[test]
    fn test_rejects_urls_without_host() {
        assert!(!is_valid_url("mailto:someone@example.com"));
        assert!(!is_valid_url("file:///tmp/video.mp4"));
        assert!(!is_valid_url("http:example.com"));
        assert!(!is_valid_url("urn:isbn:0451450523"));
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(200))]

        #[test]
        fn prop_scheme_host_shape_is_valid(
            // file URLs drop a localhost host
            scheme in "[a-z][a-z0-9+.-]{0,8}".prop_filter("not file", |s| s != "file"),
            host in "[a-z][a-z0-9]{0,10}(\\.[a-z]{2,5})?",
            path in "(/[a-z0-9]{1,8}){0,3}"
        ) {
            let text = format!("{}://{}{}", scheme, host, path);
            prop_assert!(is_valid_url(&text), "expected valid: {}", text);
        }

        #[test]
        fn prop_text_without_colon_is_invalid(text in "[a-zA-Z0-9 ./?=&_-]{0,40}") {
            prop_assert!(!is_valid_url(&text));
        }
    }
}
