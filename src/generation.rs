use crate::error::ApiError;
use crate::models::GenerationResult;
use crate::rpc::{self, RpcConfig};

pub async fn run(config: &RpcConfig) -> Result<Option<GenerationResult>, ApiError> {
    worker::console_log!("starting recurring-transfer generation run");

    match rpc::call_generation_procedure(config).await {
        Ok(result) => {
            worker::console_log!(
                "generation run completed: servicios={}, traslados={}, actualizados={}",
                processed_count(result.as_ref()),
                generated_count(result.as_ref()),
                updated_ids(result.as_ref()).len()
            );
            Ok(result)
        }
        Err(error) => {
            worker::console_error!("generation run failed: {error}");
            Err(error)
        }
    }
}

pub fn processed_count(result: Option<&GenerationResult>) -> u32 {
    result.map_or(0, |value| value.servicios_procesados)
}

pub fn generated_count(result: Option<&GenerationResult>) -> u32 {
    result.map_or(0, |value| value.traslados_generados)
}

pub fn updated_ids(result: Option<&GenerationResult>) -> &[String] {
    result.map_or(&[], |value| value.servicios_actualizados.as_slice())
}

pub fn summary_message(result: Option<&GenerationResult>) -> String {
    format!(
        "Generados {} traslados para {} servicios",
        generated_count(result),
        processed_count(result)
    )
}
