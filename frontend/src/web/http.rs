//! HTTP 传输层
//!
//! 基于 `gloo-net` 实现核心库的 `HttpClient`。JSON 请求体按原样发送，
//! multipart 请求体转换为浏览器 `FormData`，由浏览器生成 boundary。

use campus_match::MatchError;
use campus_match::error::MatchResult;
use campus_match::request::{FormValue, HttpMethod, HttpRequest, HttpResponse, RequestBody};
use gloo_net::http::{Method, RequestBuilder};
use wasm_bindgen::JsValue;
use web_sys::{Blob, BlobPropertyBag, FormData};

/// 浏览器 fetch 客户端
#[derive(Clone, Copy, Default)]
pub struct WebHttpClient;

fn js_error(context: &str, err: JsValue) -> MatchError {
    MatchError::network(format!("{}: {:?}", context, err))
}

fn method(method: HttpMethod) -> Method {
    match method {
        HttpMethod::Get => Method::GET,
        HttpMethod::Post => Method::POST,
    }
}

/// 把表单字段转换为 `FormData`
fn form_data(parts: &[campus_match::request::FormPart]) -> MatchResult<FormData> {
    let form = FormData::new().map_err(|e| js_error("创建 FormData 失败", e))?;

    for part in parts {
        match &part.value {
            FormValue::Text(text) => form
                .append_with_str(&part.name, text)
                .map_err(|e| js_error("写入表单字段失败", e))?,
            FormValue::File(file) => {
                let bytes = js_sys::Uint8Array::from(file.bytes.as_slice());
                let chunks = js_sys::Array::of1(&bytes);
                let options = BlobPropertyBag::new();
                options.set_type(&file.content_type);
                let blob = Blob::new_with_u8_array_sequence_and_options(&chunks, &options)
                    .map_err(|e| js_error("创建 Blob 失败", e))?;
                form.append_with_blob_and_filename(&part.name, &blob, &file.file_name)
                    .map_err(|e| js_error("写入文件字段失败", e))?;
            }
        }
    }

    Ok(form)
}

#[async_trait::async_trait(?Send)]
impl campus_match::HttpClient for WebHttpClient {
    async fn send(&self, req: HttpRequest) -> MatchResult<HttpResponse> {
        let mut builder = RequestBuilder::new(&req.url).method(method(req.method));
        for (key, value) in &req.headers {
            builder = builder.header(key, value);
        }

        let request = match &req.body {
            None => builder.build(),
            Some(RequestBody::Json(json)) => builder.body(json.clone()),
            Some(RequestBody::Multipart(parts)) => builder.body(form_data(parts)?),
        }
        .map_err(|e| MatchError::network(format!("请求构建失败: {}", e)))?;

        let resp = request
            .send()
            .await
            .map_err(|e| MatchError::network(e.to_string()))?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| MatchError::decode(format!("读取响应失败: {}", e)))?;

        Ok(HttpResponse { status, body })
    }
}
