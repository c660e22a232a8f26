use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// `{"ok": true}` acknowledgement.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct StatusResponse {
    pub ok: bool,
}

impl StatusResponse {
    pub fn ok() -> Self {
        Self { ok: true }
    }
}
