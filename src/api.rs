use crate::core::{ApiError, GenerateImageRequest, GenerateImageResponse, SaveResultRequest};
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

fn transport(e: JsValue) -> ApiError {
    ApiError::Transport(format!("{:?}", e))
}

/// JSON-over-fetch client for the image and spreadsheet relay.
#[derive(Clone, Debug)]
pub struct ApiClient {
    base: String,
}

impl ApiClient {
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into();
        Self {
            base: base.trim_end_matches('/').to_string(),
        }
    }

    pub async fn generate_image(&self, prompt: &str) -> Result<String, ApiError> {
        let body = GenerateImageRequest {
            prompt: prompt.to_string(),
        };
        let text = self.post("generate-image", &body).await?;
        let resp: GenerateImageResponse = serde_json::from_str(&text)?;
        Ok(resp.image_url)
    }

    pub async fn save_result(&self, row: &SaveResultRequest) -> Result<(), ApiError> {
        self.post("save-result", row).await.map(|_| ())
    }

    async fn post<T: Serialize>(&self, path: &str, body: &T) -> Result<String, ApiError> {
        let url = format!("{}/{}", self.base, path);
        let json = serde_json::to_string(body)?;

        let headers = web::Headers::new().map_err(transport)?;
        headers
            .set("Content-Type", "application/json")
            .map_err(transport)?;
        let init = web::RequestInit::new();
        init.set_method("POST");
        init.set_mode(web::RequestMode::Cors);
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&json));
        let request = web::Request::new_with_str_and_init(&url, &init).map_err(transport)?;

        let window = web::window().ok_or_else(|| ApiError::Transport("no window".into()))?;
        let pending: js_sys::Promise = window.fetch_with_request(&request);
        let resp: web::Response = JsFuture::from(pending)
            .await
            .map_err(transport)?
            .dyn_into()
            .map_err(transport)?;
        let text = JsFuture::from(resp.text().map_err(transport)?)
            .await
            .map_err(transport)?
            .as_string()
            .unwrap_or_default();
        if !resp.ok() {
            return Err(ApiError::from_status(resp.status(), &text));
        }
        Ok(text)
    }
}
