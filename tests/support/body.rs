use axum::{body::to_bytes, response::Response};

/// Read a response body as JSON
pub async fn body_json(resp: Response) -> serde_json::Value {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

/// Read a response body as UTF-8 text
pub async fn body_text(resp: Response) -> String {
    let bytes = to_bytes(resp.into_body(), usize::MAX).await.unwrap();

    String::from_utf8(bytes.to_vec()).unwrap()
}
