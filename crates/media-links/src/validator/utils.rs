use regex::Regex;
use url::Url;

#[inline]
pub fn named_group<'a>(re: &Regex, input: &'a str, name: &str) -> Option<&'a str> {
    re.captures(input)
        .and_then(|caps| caps.name(name))
        .map(|m| m.as_str())
}

/// Parses `input`, treating a scheme-less URL (`youtube.com/watch?v=..`) as
/// `https://`.
pub fn parse_lenient(input: &str) -> Result<Url, url::ParseError> {
    match Url::parse(input) {
        Err(url::ParseError::RelativeUrlWithoutBase) => Url::parse(&format!("https://{input}")),
        other => other,
    }
}

/// Whether the query string of `url` carries `key` with a non-empty value.
pub fn has_query_param(url: &Url, key: &str) -> bool {
    url.query_pairs().any(|(k, v)| k == key && !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_lenient() {
        let url = parse_lenient("youtube.com/watch?v=a").unwrap();
        assert_eq!(url.host_str(), Some("youtube.com"));
        assert!(has_query_param(&url, "v"));

        let url = parse_lenient("http://youtu.be/x").unwrap();
        assert_eq!(url.scheme(), "http");
    }

    #[test]
    fn test_blank_param_is_absent() {
        let url = parse_lenient("https://www.youtube.com/watch?v=&list=PL1").unwrap();
        assert!(!has_query_param(&url, "v"));
        assert!(has_query_param(&url, "list"));
    }
}
