use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::{Headers, Request, RequestInit, Response};

use super::{ApiError, ApiResult};

fn js_error(e: JsValue) -> ApiError {
    ApiError::Network(e.as_string().unwrap_or_else(|| format!("{:?}", e)))
}

/// `POST` to `url`, with a JSON body when one is given.
pub(crate) async fn post<T: Serialize + ?Sized>(url: &str, body: Option<&T>) -> ApiResult<()> {
    let init = RequestInit::new();
    init.set_method("POST");

    if let Some(body) = body {
        let json = serde_json::to_string(body).map_err(|e| ApiError::Serialization(e.to_string()))?;
        let headers = Headers::new().map_err(js_error)?;
        headers.set("Content-Type", "application/json").map_err(js_error)?;
        init.set_headers(&headers);
        init.set_body(&JsValue::from_str(&json));
    }

    let request = Request::new_with_str_and_init(url, &init).map_err(js_error)?;
    let window = web_sys::window().ok_or_else(|| ApiError::Network("no window".to_string()))?;
    let response: Response = JsFuture::from(window.fetch_with_request(&request))
        .await
        .map_err(js_error)?
        .dyn_into()
        .map_err(js_error)?;

    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Status(response.status()))
    }
}
