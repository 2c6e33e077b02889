//! Tests for Gemini wire shapes.

use moniker_models::{GenerateContentRequest, GenerateContentResponse};
use serde_json::json;

#[test]
fn test_request_wire_shape() {
    let request = GenerateContentRequest::from_prompt("list usernames");

    let value = serde_json::to_value(&request).unwrap();
    assert_eq!(
        value,
        json!({
            "contents": [
                { "parts": [ { "text": "list usernames" } ] }
            ]
        })
    );
}

#[test]
fn test_response_text_extraction() {
    let payload = json!({
        "candidates": [
            {
                "content": {
                    "parts": [ { "text": "alpha\nbravo\ncharlie" } ],
                    "role": "model"
                },
                "finishReason": "STOP"
            }
        ],
        "usageMetadata": { "totalTokenCount": 42 }
    });

    let response: GenerateContentResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.text().as_deref(), Some("alpha\nbravo\ncharlie"));
    assert_eq!(
        response.candidates()[0].finish_reason().as_deref(),
        Some("STOP")
    );
}

#[test]
fn test_response_concatenates_parts_of_first_candidate() {
    let payload = json!({
        "candidates": [
            { "content": { "parts": [ { "text": "one\n" }, { "text": "two" } ] } },
            { "content": { "parts": [ { "text": "ignored" } ] } }
        ]
    });

    let response: GenerateContentResponse = serde_json::from_value(payload).unwrap();
    assert_eq!(response.text().as_deref(), Some("one\ntwo"));
}

#[test]
fn test_response_without_candidates_has_no_text() {
    let response: GenerateContentResponse = serde_json::from_value(json!({})).unwrap();
    assert!(response.candidates().is_empty());
    assert!(response.text().is_none());
}

#[test]
fn test_response_with_textless_parts_has_no_text() {
    let payload = json!({
        "candidates": [
            { "content": { "parts": [ { "inlineData": { "mimeType": "image/png" } } ] } }
        ]
    });

    let response: GenerateContentResponse = serde_json::from_value(payload).unwrap();
    assert!(response.text().is_none());
}
