use ktour_application::envelope::decode_page;
use ktour_domain::{CodeEntry, KtourError, TourImage, TourItem};

mod helpers;
use helpers::{empty_body, error_body, list_body};

#[test]
fn test_decode_typed_items() {
    let body = list_body(&["경복궁", "창덕궁"], 2);

    let page = decode_page::<TourItem>(body.as_bytes()).unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.items[0].title.as_deref(), Some("경복궁"));
    assert_eq!(page.items[1].title.as_deref(), Some("창덕궁"));
    assert_eq!(page.page_no, 1);
    assert_eq!(page.num_of_rows, 10);
    assert_eq!(page.total_count, 2);
}

#[test]
fn test_pagination_defaults_when_absent() {
    let body = r#"{
        "response": {
            "header": { "resultCode": "0000", "resultMsg": "OK" },
            "body": { "items": { "item": [] } }
        }
    }"#;

    let page = decode_page::<TourItem>(body.as_bytes()).unwrap();

    assert_eq!(page.page_no, 1);
    assert_eq!(page.num_of_rows, 10);
    assert_eq!(page.total_count, 0);
}

#[test]
fn test_pagination_accepts_string_numbers() {
    let body = r#"{
        "response": {
            "header": { "resultCode": "0000", "resultMsg": "OK" },
            "body": {
                "items": { "item": [] },
                "numOfRows": "20",
                "pageNo": "3",
                "totalCount": "55"
            }
        }
    }"#;

    let page = decode_page::<TourItem>(body.as_bytes()).unwrap();

    assert_eq!(page.page_no, 3);
    assert_eq!(page.num_of_rows, 20);
    assert_eq!(page.total_count, 55);
}

#[test]
fn test_result_code_failure_wins_over_http_success() {
    let body = error_body("9999", "SERVICE ERROR");

    let result = decode_page::<TourItem>(body.as_bytes());

    match result {
        Err(KtourError::Api { code, message }) => {
            assert_eq!(code, "9999");
            assert_eq!(message, "SERVICE ERROR");
        }
        other => panic!("expected Api error, got {:?}", other),
    }
}

#[test]
fn test_known_upstream_error_codes_surface() {
    // Quota and auth failures arrive as ordinary envelopes with HTTP 200.
    for code in ["22", "30", "31"] {
        let body = error_body(code, "LIMITED NUMBER OF SERVICE REQUESTS EXCEEDS ERROR");
        let result = decode_page::<TourItem>(body.as_bytes());
        assert!(matches!(result, Err(KtourError::Api { .. })), "code {}", code);
    }
}

#[test]
fn test_absent_header_is_success() {
    let body = r#"{
        "response": {
            "body": {
                "items": { "item": [ { "code": "1", "name": "서울", "rnum": 1 } ] },
                "totalCount": 1
            }
        }
    }"#;

    let page = decode_page::<CodeEntry>(body.as_bytes()).unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.items[0].name.as_deref(), Some("서울"));
}

#[test]
fn test_items_empty_string_quirk_yields_empty_page() {
    let page = decode_page::<TourItem>(empty_body().as_bytes()).unwrap();

    assert!(page.is_empty());
    assert_eq!(page.total_count, 0);
}

#[test]
fn test_single_object_item_becomes_one_row() {
    let body = r#"{
        "response": {
            "header": { "resultCode": "0000", "resultMsg": "OK" },
            "body": {
                "items": { "item": { "contentid": "126508", "title": "경복궁" } },
                "totalCount": 1
            }
        }
    }"#;

    let page = decode_page::<TourItem>(body.as_bytes()).unwrap();

    assert_eq!(page.len(), 1);
    assert_eq!(page.items[0].content_id.as_deref(), Some("126508"));
}

#[test]
fn test_missing_body_with_success_header_is_empty_page() {
    let body = r#"{ "response": { "header": { "resultCode": "0000", "resultMsg": "OK" } } }"#;

    let page = decode_page::<TourItem>(body.as_bytes()).unwrap();

    assert!(page.is_empty());
    assert_eq!(page.page_no, 1);
}

#[test]
fn test_malformed_json_is_decode_error() {
    let result = decode_page::<TourItem>(b"{ not json");
    assert!(matches!(result, Err(KtourError::Decode(_))));
}

#[test]
fn test_markup_body_is_decode_error() {
    // The gateway answers auth failures with XML regardless of _type=json.
    let body = r#"<OpenAPI_ServiceResponse>
        <cmmMsgHeader>
            <returnAuthMsg>SERVICE_KEY_IS_NOT_REGISTERED_ERROR</returnAuthMsg>
        </cmmMsgHeader>
    </OpenAPI_ServiceResponse>"#;

    let result = decode_page::<TourItem>(body.as_bytes());
    assert!(matches!(result, Err(KtourError::Decode(_))));
}

#[test]
fn test_missing_envelope_is_decode_error() {
    let result = decode_page::<TourItem>(br#"{ "unexpected": true }"#);
    assert!(matches!(result, Err(KtourError::Decode(_))));
}

#[test]
fn test_image_rows_decode() {
    let body = r#"{
        "response": {
            "header": { "resultCode": "0000", "resultMsg": "OK" },
            "body": {
                "items": { "item": [
                    { "contentid": "126508", "originimgurl": "http://x/1.jpg", "serialnum": "1" },
                    { "contentid": "126508", "originimgurl": "http://x/2.jpg", "serialnum": "2" }
                ] },
                "totalCount": 2
            }
        }
    }"#;

    let page = decode_page::<TourImage>(body.as_bytes()).unwrap();

    assert_eq!(page.len(), 2);
    assert_eq!(page.items[1].origin_image_url.as_deref(), Some("http://x/2.jpg"));
}
