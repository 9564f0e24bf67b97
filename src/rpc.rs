use serde::Deserialize;
use url::Url;
use worker::wasm_bindgen::JsValue;
use worker::{Env, Fetch, Headers, Method, Request, RequestInit};

use crate::error::ApiError;
use crate::models::{GenerationResult, RPC_FUNCTION, SERVICE_ROLE_KEY_VAR, SUPABASE_URL_VAR};

#[derive(Debug, Clone)]
pub struct RpcConfig {
    pub base_url: String,
    pub service_role_key: String,
}

impl RpcConfig {
    pub fn from_env(env: &Env) -> Self {
        Self {
            base_url: env_string(env, SUPABASE_URL_VAR),
            service_role_key: env_string(env, SERVICE_ROLE_KEY_VAR),
        }
    }
}

fn env_string(env: &Env, name: &str) -> String {
    env.secret(name)
        .map(|secret| secret.to_string())
        .or_else(|_| env.var(name).map(|var| var.to_string()))
        .unwrap_or_default()
}

pub fn rpc_endpoint(base_url: &str, function: &str) -> Result<Url, ApiError> {
    let base = base_url.trim().trim_end_matches('/');
    if base.is_empty() {
        return Err(ApiError::Config(
            "supabase base URL is not configured".to_string(),
        ));
    }

    Ok(Url::parse(&format!("{base}/rest/v1/rpc/{function}"))?)
}

pub async fn call_generation_procedure(
    config: &RpcConfig,
) -> Result<Option<GenerationResult>, ApiError> {
    let endpoint = rpc_endpoint(&config.base_url, RPC_FUNCTION)?;

    let mut headers = Headers::new();
    headers.set("apikey", &config.service_role_key)?;
    headers.set(
        "Authorization",
        &format!("Bearer {}", config.service_role_key),
    )?;
    headers.set("Content-Type", "application/json")?;

    let mut init = RequestInit::new();
    init.with_method(Method::Post)
        .with_headers(headers)
        .with_body(Some(JsValue::from_str("{}")));

    let request = Request::new_with_init(endpoint.as_str(), &init)?;
    let mut response = Fetch::Request(request).send().await.map_err(|error| {
        ApiError::Upstream(format!("failed to reach data service: {error}"))
    })?;

    let status = response.status_code();
    let body = response.text().await?;
    if status >= 400 {
        return Err(ApiError::Rpc(rpc_error_message(status, &body)));
    }

    parse_rpc_result(&body)
}

pub fn parse_rpc_result(body: &str) -> Result<Option<GenerationResult>, ApiError> {
    if body.trim().is_empty() {
        return Ok(None);
    }

    let result = serde_json::from_str::<Option<GenerationResult>>(body)?;
    Ok(result)
}

#[derive(Debug, Deserialize)]
struct RpcErrorBody {
    message: Option<String>,
}

pub fn rpc_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<RpcErrorBody>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.trim().is_empty())
        .unwrap_or_else(|| format!("remote procedure call failed with status {status}"))
}
