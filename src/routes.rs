use chrono::{DateTime, SecondsFormat, Utc};
use worker::{Context, Env, Method, Request, Response, Result};

use crate::error::ApiError;
use crate::generation;
use crate::models::{
    CORS_ALLOW_HEADERS, CORS_ALLOW_ORIGIN, GenerationResult, RunFailureResponse,
    RunSuccessResponse, UNKNOWN_ERROR_MESSAGE,
};
use crate::rpc::RpcConfig;

pub async fn handle(req: Request, env: Env, _ctx: Context) -> Result<Response> {
    if req.method() == Method::Options {
        return preflight_response();
    }

    let config = RpcConfig::from_env(&env);
    match generation::run(&config).await {
        Ok(result) => success_response(result),
        Err(error) => failure_response(&error),
    }
}

fn preflight_response() -> Result<Response> {
    let mut response = Response::ok("ok")?;
    apply_cors(&mut response)?;
    Ok(response)
}

fn success_response(result: Option<GenerationResult>) -> Result<Response> {
    let mut response = Response::from_json(&success_envelope(result, Utc::now()))?;
    apply_cors(&mut response)?;
    Ok(response)
}

pub fn failure_response(error: &ApiError) -> Result<Response> {
    let mut response = Response::from_json(&failure_envelope(error.message(), Utc::now()))?;
    apply_cors(&mut response)?;
    Ok(response.with_status(500))
}

fn apply_cors(response: &mut Response) -> Result<()> {
    let headers = response.headers_mut();
    headers.set("Access-Control-Allow-Origin", CORS_ALLOW_ORIGIN)?;
    headers.set("Access-Control-Allow-Headers", CORS_ALLOW_HEADERS)?;
    Ok(())
}

pub fn success_envelope(
    result: Option<GenerationResult>,
    now: DateTime<Utc>,
) -> RunSuccessResponse {
    let mensaje = generation::summary_message(result.as_ref());
    RunSuccessResponse {
        success: true,
        timestamp: iso_timestamp(now),
        resultado: result,
        mensaje,
    }
}

pub fn failure_envelope(message: &str, now: DateTime<Utc>) -> RunFailureResponse {
    let message = message.trim();
    RunFailureResponse {
        success: false,
        timestamp: iso_timestamp(now),
        error: if message.is_empty() {
            UNKNOWN_ERROR_MESSAGE.to_string()
        } else {
            message.to_string()
        },
    }
}

pub fn iso_timestamp(now: DateTime<Utc>) -> String {
    now.to_rfc3339_opts(SecondsFormat::Millis, true)
}
