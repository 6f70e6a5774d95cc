//! Tests for request encoding and response inspection.

use http::header::CONTENT_TYPE;
use http::{HeaderMap, HeaderValue, Method, StatusCode};

use super::{FORM_URLENCODED, HttpRequest, HttpResponse};

fn hooks_url() -> url::Url {
    url::Url::parse("https://calendly.com/api/v1/hooks").unwrap()
}

fn ok_with_content_type(content_type: &str) -> HttpResponse {
    let mut headers = HeaderMap::new();
    headers.insert(CONTENT_TYPE, HeaderValue::from_str(content_type).unwrap());
    HttpResponse::new(StatusCode::OK, headers, Vec::new())
}

mod query_encoding {
    use super::*;

    #[test]
    fn pairs_are_percent_encoded_into_query() {
        let req = HttpRequest::new(Method::GET, hooks_url())
            .with_query(&[("count", "2"), ("q", "a b&c")]);

        assert_eq!(req.url.query(), Some("count=2&q=a+b%26c"));
        assert!(req.body.is_none());
        assert!(req.headers.is_empty());
    }

    #[test]
    fn no_pairs_means_no_question_mark() {
        let params: [(&str, &str); 0] = [];
        let req = HttpRequest::new(Method::GET, hooks_url()).with_query(&params);

        assert_eq!(req.url.as_str(), "https://calendly.com/api/v1/hooks");
    }
}

mod form_encoding {
    use super::*;

    #[test]
    fn pairs_become_body_with_form_content_type() {
        let req = HttpRequest::new(Method::POST, hooks_url()).with_form(&[
            ("url", "https://example.com/hook?a=1"),
            ("events[]", "invitee.created"),
            ("events[]", "invitee.canceled"),
        ]);

        assert_eq!(
            req.body.as_deref(),
            Some(
                b"url=https%3A%2F%2Fexample.com%2Fhook%3Fa%3D1\
                  &events%5B%5D=invitee.created&events%5B%5D=invitee.canceled"
                    .as_slice()
            )
        );
        assert_eq!(req.headers.get(CONTENT_TYPE).unwrap(), FORM_URLENCODED);
        assert_eq!(req.url.query(), None);
    }

    #[test]
    fn no_pairs_means_no_body_and_no_content_type() {
        let params: [(&str, String); 0] = [];
        let req = HttpRequest::new(Method::DELETE, hooks_url()).with_form(&params);

        assert!(req.body.is_none());
        assert!(req.headers.get(CONTENT_TYPE).is_none());
    }
}

mod content_type {
    use super::*;

    #[test]
    fn absent_header_is_not_json() {
        let resp = HttpResponse::new(StatusCode::OK, HeaderMap::new(), b"{}".to_vec());

        assert_eq!(resp.content_type(), None);
        assert!(!resp.is_json());
    }

    #[test]
    fn json_with_charset_is_json() {
        assert!(ok_with_content_type("application/json; charset=utf-8").is_json());
    }

    #[test]
    fn json_mentioned_after_another_type_is_not_json() {
        assert!(!ok_with_content_type("text/html").is_json());
        assert!(!ok_with_content_type("text/plain; application/json").is_json());
    }

    #[test]
    fn only_first_header_value_counts() {
        let mut headers = HeaderMap::new();
        headers.append(CONTENT_TYPE, HeaderValue::from_static("text/plain"));
        headers.append(CONTENT_TYPE, HeaderValue::from_static("application/json"));
        let resp = HttpResponse::new(StatusCode::OK, headers, Vec::new());

        assert_eq!(resp.content_type(), Some("text/plain"));
        assert!(!resp.is_json());
    }

    #[test]
    fn unprintable_header_is_treated_as_absent() {
        let mut headers = HeaderMap::new();
        headers.insert(
            CONTENT_TYPE,
            HeaderValue::from_bytes(b"application/json\xff").unwrap(),
        );
        let resp = HttpResponse::new(StatusCode::OK, headers, Vec::new());

        assert_eq!(resp.content_type(), None);
        assert!(!resp.is_json());
    }
}
