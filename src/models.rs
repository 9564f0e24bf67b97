use serde::{Deserialize, Serialize};

pub const RPC_FUNCTION: &str = "generar_traslados_proximos_lotes";
pub const SUPABASE_URL_VAR: &str = "SUPABASE_URL";
pub const SERVICE_ROLE_KEY_VAR: &str = "SUPABASE_SERVICE_ROLE_KEY";
pub const UNKNOWN_ERROR_MESSAGE: &str = "Error desconocido";
pub const CORS_ALLOW_ORIGIN: &str = "*";
pub const CORS_ALLOW_HEADERS: &str = "authorization, x-client-info, apikey, content-type";

// Summary reported by the database procedure. The procedure may return
// `null`, and individual fields may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct GenerationResult {
    #[serde(default)]
    pub servicios_procesados: u32,
    #[serde(default)]
    pub traslados_generados: u32,
    #[serde(default)]
    pub servicios_actualizados: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunSuccessResponse {
    pub success: bool,
    pub timestamp: String,
    pub resultado: Option<GenerationResult>,
    pub mensaje: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RunFailureResponse {
    pub success: bool,
    pub timestamp: String,
    pub error: String,
}
