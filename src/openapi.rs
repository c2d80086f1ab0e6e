use utoipa::OpenApi;

use crate::models::{Activity, ErrorDetail, MessageResponse};

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::handlers::root,
        crate::handlers::healthz_live,
        crate::handlers::healthz_ready,
        crate::handlers::get_activities,
        crate::handlers::signup_for_activity,
        crate::handlers::unregister_from_activity
    ),
    components(schemas(Activity, MessageResponse, ErrorDetail)),
    tags(
        (name = "activities", description = "Extracurricular activity signups")
    )
)]
pub struct ApiDoc;
