//! Tests for request normalization and ALB event decoding.

#[cfg(test)]
mod tests {
    use std::collections::HashMap;
    use serde::Deserialize;
    use serde_json::json;

    use crate::request::{AlbEvent, Error, IncomingRequest};

    fn alb_event(method: &str, path: &str, body: &str, is_base64_encoded: bool) -> serde_json::Value {
        json!({
            "requestContext": {
                "elb": {
                    "targetGroupArn": "arn:"
                }
            },
            "httpMethod": method,
            "path": path,
            "queryStringParameters": {},
            "headers": {
                "accept": "*/*",
                "content-type": "application/json",
                "host": "dummyhost.dummy.com",
                "x-forwarded-proto": "https"
            },
            "body": body,
            "isBase64Encoded": is_base64_encoded
        })
    }

    #[test]
    fn test_new_request_has_empty_body_object() {
        let request = IncomingRequest::new("GET", "/");
        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/");
        assert!(request.headers.is_empty());
        assert!(request.query_params.is_empty());
        assert_eq!(request.body, json!({}));
    }

    #[test]
    fn test_case_insensitive_headers() {
        let mut headers = HashMap::new();
        headers.insert("Content-Type".to_string(), "application/json".to_string());
        let request = IncomingRequest::new("GET", "/").with_headers(headers);

        assert!(request.has_header("content-type"));
        assert!(request.has_header("CONTENT-TYPE"));
        assert_eq!(request.get_header("content-type").unwrap(), "application/json");
        assert!(!request.has_header("accept"));
    }

    #[test]
    fn test_query_params() {
        let mut query = HashMap::new();
        query.insert("page".to_string(), "2".to_string());
        let request = IncomingRequest::new("GET", "/items").with_query_params(query);

        assert!(request.has_query_param("page"));
        assert_eq!(request.get_query_param("page").unwrap(), "2");
        assert!(!request.has_query_param("Page"));
        assert_eq!(request.get_query_param("limit"), None);
    }

    #[test]
    fn test_typed_body() {
        #[derive(Debug, Deserialize, PartialEq)]
        struct Person {
            first_name: String,
            last_name: String,
        }

        let request = IncomingRequest::new("POST", "/people")
            .with_body(json!({"first_name": "Bob", "last_name": "Smith"}));
        let person: Person = request.json().unwrap();
        assert_eq!(person, Person { first_name: "Bob".to_string(), last_name: "Smith".to_string() });

        let wrong_shape = IncomingRequest::new("POST", "/people").with_body(json!(42));
        assert!(matches!(wrong_shape.json::<Person>(), Err(Error::JsonError(_))));
    }

    #[test]
    fn test_event_with_empty_body() {
        let event: AlbEvent = serde_json::from_value(alb_event("GET", "/hello/user", "", false)).unwrap();
        let request = event.into_request().unwrap();

        assert_eq!(request.method, "GET");
        assert_eq!(request.path, "/hello/user");
        assert_eq!(request.body, json!({}));
        assert_eq!(request.get_header("Host").unwrap(), "dummyhost.dummy.com");
    }

    #[test]
    fn test_event_with_json_body() {
        let body = "{\n  \"first_name\": \"Bob\",\n  \"last_name\": \"Smith\"\n}";
        let event: AlbEvent = serde_json::from_value(alb_event("POST", "/update/user", body, false)).unwrap();
        let request = event.into_request().unwrap();

        assert_eq!(request.body["first_name"], "Bob");
        assert_eq!(request.body["last_name"], "Smith");
    }

    #[test]
    fn test_event_with_base64_form_body() {
        // "name=Bob+Smith&city=New%20York&empty=&name=Alice"
        let encoded = "bmFtZT1Cb2IrU21pdGgmY2l0eT1OZXclMjBZb3JrJmVtcHR5PSZuYW1lPUFsaWNl";
        let event: AlbEvent = serde_json::from_value(alb_event("POST", "/form", encoded, true)).unwrap();
        let request = event.into_request().unwrap();

        assert_eq!(request.body, json!({"name": "Bob Smith", "city": "New York"}));
    }

    #[test]
    fn test_event_with_invalid_json_body() {
        let event: AlbEvent = serde_json::from_value(alb_event("POST", "/x", "{not json", false)).unwrap();
        assert!(matches!(event.into_request(), Err(Error::JsonError(_))));
    }

    #[test]
    fn test_event_with_invalid_base64_body() {
        let event: AlbEvent = serde_json::from_value(alb_event("POST", "/x", "***", true)).unwrap();
        assert!(matches!(event.into_request(), Err(Error::Base64Error(_))));
    }

    #[test]
    fn test_event_with_non_utf8_body() {
        // base64 of the bytes [0xff, 0xfe]
        let event: AlbEvent = serde_json::from_value(alb_event("POST", "/x", "//4=", true)).unwrap();
        assert!(matches!(event.into_request(), Err(Error::Utf8Error(_))));
    }

    #[test]
    fn test_event_with_missing_optional_fields() {
        let event: AlbEvent = serde_json::from_value(json!({
            "httpMethod": "DELETE",
            "path": "/items/1",
            "queryStringParameters": null,
            "body": null
        }))
        .unwrap();
        let request = event.into_request().unwrap();

        assert_eq!(request.method, "DELETE");
        assert!(request.headers.is_empty());
        assert!(request.query_params.is_empty());
        assert_eq!(request.body, json!({}));
    }
}
