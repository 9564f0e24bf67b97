pub mod error;
pub mod generation;
pub mod models;
pub mod routes;
pub mod rpc;

use worker::{Context, Env, Request, Response, Result, ScheduleContext, ScheduledEvent, event};

use crate::error::ApiError;
use crate::rpc::RpcConfig;

#[event(fetch)]
async fn fetch(req: Request, env: Env, ctx: Context) -> Result<Response> {
    match routes::handle(req, env, ctx).await {
        Ok(response) => Ok(response),
        Err(error) => {
            worker::console_error!("request handling failed: {error}");
            routes::failure_response(&ApiError::Internal(error.to_string()))
        }
    }
}

#[event(scheduled)]
async fn scheduled(_event: ScheduledEvent, env: Env, _ctx: ScheduleContext) {
    let config = RpcConfig::from_env(&env);
    if let Err(error) = generation::run(&config).await {
        worker::console_error!("scheduled generation run failed: {error}");
    }
}
