// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio: recibe un SubmissionPlan ya validado y lo
// convierte en una petición multipart.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder, Response};
use web_sys::{File, FormData, RequestCredentials};

use crate::config::{join_url, CONFIG};
use crate::errors::ApiError;
use crate::models::Product;
use crate::utils::FIELD_IMAGES;
use crate::viewmodels::{HttpMethod, SubmissionPlan};

/// Cliente API de productos (stateless)
#[derive(Clone)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self {
            base_url: CONFIG.api_base.clone(),
        }
    }

    fn url(&self, path: &str) -> String {
        join_url(&self.base_url, path)
    }

    /// Obtener producto por id
    pub async fn get_product(&self, id: &str) -> Result<Product, ApiError> {
        let url = self.url(&format!("/api/products/{}", id));
        log::info!("📋 Obteniendo producto: {}", id);

        let response = Request::get(&url)
            .credentials(RequestCredentials::Include)
            .send()
            .await?;

        let product = read_json::<Product>(response).await?;
        log::info!("✅ Producto obtenido: {} ({} imágenes)", product.name, product.images.len());
        Ok(product)
    }

    /// Crear o actualizar según el plan. `None` si el servidor respondió OK
    /// pero sin un producto reconocible en el cuerpo.
    pub async fn submit(&self, plan: &SubmissionPlan<File>) -> Result<Option<Product>, ApiError> {
        let url = self.url(&plan.path);
        let body = build_form_data(plan)?;

        log::info!(
            "📤 {:?} {} ({} partes)",
            plan.method,
            plan.path,
            plan.part_count()
        );

        let builder: RequestBuilder = match plan.method {
            HttpMethod::Post => Request::post(&url),
            HttpMethod::Put => Request::put(&url),
        };

        // Sin Content-Type: el navegador pone el boundary del multipart
        let response = builder
            .credentials(RequestCredentials::Include)
            .body(body)?
            .send()
            .await?;

        match read_json::<Product>(response).await {
            Ok(product) => Ok(Some(product)),
            Err(ApiError::Parse(e)) => {
                log::warn!("⚠️ Respuesta OK sin producto legible: {}", e);
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

fn build_form_data(plan: &SubmissionPlan<File>) -> Result<FormData, ApiError> {
    let form = FormData::new()?;
    for (name, value) in &plan.fields {
        form.append_with_str(name, value)?;
    }
    for file in &plan.images {
        form.append_with_blob_and_filename(FIELD_IMAGES, file, &file.name())?;
    }
    Ok(form)
}

async fn read_json<T: serde::de::DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        let message = extract_server_message(&body);
        log::error!("❌ HTTP {}: {}", status, message.as_deref().unwrap_or(&body));
        return Err(ApiError::Http { status, message });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Mensaje legible del cuerpo de error: `{"message": ...}` o `{"error": ...}`
pub fn extract_server_message(body: &str) -> Option<String> {
    let value: serde_json::Value = serde_json::from_str(body).ok()?;
    ["message", "error"]
        .iter()
        .filter_map(|key| value.get(*key))
        .filter_map(|v| v.as_str())
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn message_field_wins() {
        assert_eq!(
            extract_server_message(r#"{"message":"Product not found","error":"x"}"#),
            Some("Product not found".into())
        );
    }

    #[test]
    fn error_field_is_used_when_message_missing() {
        assert_eq!(
            extract_server_message(r#"{"error":"Unauthorized"}"#),
            Some("Unauthorized".into())
        );
        assert_eq!(
            extract_server_message(r#"{"message":"  ","error":"Bad price"}"#),
            Some("Bad price".into())
        );
    }

    #[test]
    fn non_json_or_empty_bodies_have_no_message() {
        assert_eq!(extract_server_message("<html>502</html>"), None);
        assert_eq!(extract_server_message(""), None);
        assert_eq!(extract_server_message(r#"{"message":42}"#), None);
    }

    #[test]
    fn url_joins_base_and_path() {
        let client = ApiClient {
            base_url: "http://shop.test/".into(),
        };
        assert_eq!(
            client.url("/api/products/update/42"),
            "http://shop.test/api/products/update/42"
        );
    }
}
