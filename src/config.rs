use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub api_base: String,
    pub environment: String,
    pub enable_logging: bool,
    pub toast_duration_ms: u32,
    pub redirect_delay_ms: u32,
    pub listing_route: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:5000".to_string(),
            environment: "development".to_string(),
            enable_logging: true,
            toast_duration_ms: 3_000,
            redirect_delay_ms: 2_000,
            listing_route: "/my-products".to_string(),
        }
    }
}

impl AppConfig {
    /// Carga la configuración desde variables de entorno en tiempo de compilación
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_base: option_env!("API_BASE")
                .map(|s| s.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_base),
            environment: option_env!("ENVIRONMENT")
                .map(str::to_string)
                .unwrap_or(defaults.environment),
            enable_logging: option_env!("ENABLE_LOGGING")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.enable_logging),
            toast_duration_ms: option_env!("TOAST_DURATION_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.toast_duration_ms),
            redirect_delay_ms: option_env!("REDIRECT_DELAY_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.redirect_delay_ms),
            listing_route: option_env!("LISTING_ROUTE")
                .map(str::to_string)
                .unwrap_or(defaults.listing_route),
        }
    }

    /// Las imágenes existentes vienen como rutas relativas al servidor
    pub fn asset_url(&self, relative: &str) -> String {
        if relative.starts_with("http://") || relative.starts_with("https://") {
            return relative.to_string();
        }
        join_url(&self.api_base, relative)
    }

    /// Verifica si el modo de logging está habilitado
    pub fn is_logging_enabled(&self) -> bool {
        self.enable_logging
    }

    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

/// Une base y ruta con una sola `/` entre ambas
pub(crate) fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}

// Configuración global estática
lazy_static::lazy_static! {
    pub static ref CONFIG: AppConfig = AppConfig::from_env();
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(base: &str) -> AppConfig {
        AppConfig {
            api_base: base.to_string(),
            ..AppConfig::default()
        }
    }

    #[test]
    fn join_url_uses_single_slash() {
        assert_eq!(
            join_url("http://shop.test/", "/api/products/7"),
            "http://shop.test/api/products/7"
        );
        assert_eq!(
            join_url("http://shop.test", "api/products/create"),
            "http://shop.test/api/products/create"
        );
    }

    #[test]
    fn asset_url_resolves_relative_paths_against_base() {
        let cfg = config("http://shop.test");
        assert_eq!(cfg.asset_url("/uploads/a.png"), "http://shop.test/uploads/a.png");
        assert_eq!(cfg.asset_url("uploads/b.png"), "http://shop.test/uploads/b.png");
    }

    #[test]
    fn asset_url_keeps_absolute_urls() {
        let cfg = config("http://shop.test");
        assert_eq!(
            cfg.asset_url("https://cdn.test/c.png"),
            "https://cdn.test/c.png"
        );
    }

    #[test]
    fn defaults_match_form_timings() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.toast_duration_ms, 3_000);
        assert_eq!(cfg.redirect_delay_ms, 2_000);
        assert_eq!(cfg.listing_route, "/my-products");
        assert!(!cfg.is_production());
    }
}
