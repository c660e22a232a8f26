use axum::http::HeaderValue;
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};

/// Front-end origins allowed when nothing is configured.
pub const DEFAULT_ORIGINS: &str = "http://localhost:8080,http://127.0.0.1:8080";

/// Static allow-list of browser origins permitted to call the API.
#[derive(Debug, Clone)]
pub struct AllowedOrigins {
    origins: Vec<HeaderValue>,
}

impl AllowedOrigins {
    pub fn from_comma_separated(origins_str: &str) -> Self {
        let origins = origins_str
            .split(',')
            .map(str::trim)
            .filter(|s| !s.is_empty() && *s != "*")
            .filter_map(|s| match HeaderValue::from_str(s) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!(origin = s, "Ignoring malformed CORS origin");
                    None
                }
            })
            .collect();

        Self { origins }
    }

    pub fn len(&self) -> usize {
        self.origins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.origins.is_empty()
    }

    /// Credentials are allowed, so methods and headers are mirrored from
    /// the request instead of using a wildcard.
    pub fn layer(&self) -> CorsLayer {
        CorsLayer::new()
            .allow_origin(AllowOrigin::list(self.origins.clone()))
            .allow_credentials(true)
            .allow_methods(AllowMethods::mirror_request())
            .allow_headers(AllowHeaders::mirror_request())
    }
}

impl Default for AllowedOrigins {
    fn default() -> Self {
        Self::from_comma_separated(DEFAULT_ORIGINS)
    }
}
