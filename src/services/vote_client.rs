// ============================================================================
// VOTE CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// No interpreta el status: devuelve el código y el handler decide
// ============================================================================

use gloo_net::http::Request;

/// Cliente de votos - SOLO comunicación HTTP (stateless)
#[derive(Clone, Default)]
pub struct VoteClient;

impl VoteClient {
    pub fn new() -> Self {
        Self
    }

    /// POST al endpoint del control, cuerpo vacío y sin cabeceras propias.
    /// Cualquier respuesta HTTP es Ok(status); solo fallos de red son Err.
    pub async fn post_vote(&self, endpoint: &str) -> Result<u16, String> {
        log::debug!("🗳️ [VOTE-CLIENT] POST {}", endpoint);

        let response = Request::post(endpoint)
            .send()
            .await
            .map_err(|e| format!("Network error: {}", e))?;

        let status = response.status();
        log::debug!("📨 [VOTE-CLIENT] {} -> HTTP {} {}", endpoint, status, response.status_text());

        Ok(status)
    }
}
