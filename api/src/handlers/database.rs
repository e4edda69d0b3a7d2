//! Database schema handler (diagnostic)

use axum::{extract::State, Json};
use serde::Serialize;

use crate::app::PropertyInfo;
use crate::domain::ports::NotionClient;
use crate::error::AppError;
use crate::AppState;

/// Response body for GET /api/database/properties
#[derive(Serialize)]
pub struct PropertiesResponse {
    pub success: bool,
    pub properties: Vec<PropertyInfo>,
}

/// GET /api/database/properties
///
/// Names, types, and ids of the database's properties. Useful for checking
/// which aliases a database actually carries.
pub async fn database_properties<N: NotionClient>(
    State(state): State<AppState<N>>,
) -> Result<Json<PropertiesResponse>, AppError> {
    let properties = state.post_service.database_properties().await?;

    Ok(Json(PropertiesResponse {
        success: true,
        properties,
    }))
}
