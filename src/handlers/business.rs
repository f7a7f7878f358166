use actix_web::{web, HttpResponse};

use crate::error::ApiError;
use crate::models::{CreateBusinessRequest, CreateBusinessResponse};
use crate::services::provisioning;
use crate::state::AppState;

pub async fn create_business(
    data: web::Json<CreateBusinessRequest>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ApiError> {
    let provisioned = provisioning::provision(&state.pool, &state.config, data.into_inner()).await?;

    Ok(HttpResponse::Ok().json(CreateBusinessResponse {
        ok: true,
        business_id: provisioned.business.id,
        slug: provisioned.slug,
    }))
}
