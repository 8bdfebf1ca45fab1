use axum::Json;
use utoipa::OpenApi;

/// Serve the generated OpenAPI document
pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

// API Documentation
#[derive(OpenApi)]
#[openapi(
    paths(
        // Health endpoints
        crate::api::handlers::health::ping,
        crate::api::handlers::health::health_check,

        // Message endpoints
        crate::api::handlers::messages::add_message,
        crate::api::handlers::messages::count_messages,

        // User endpoints
        crate::api::handlers::users::list_users,
        crate::api::handlers::users::create_user,
        crate::api::handlers::users::get_user,
        crate::api::handlers::users::update_user,
        crate::api::handlers::users::delete_user,

        // Medication endpoints
        crate::api::handlers::meds::list_meds,
        crate::api::handlers::meds::create_med,
        crate::api::handlers::meds::get_med,
        crate::api::handlers::meds::update_med,
        crate::api::handlers::meds::delete_med,

        // Disease endpoints
        crate::api::handlers::diseases::list_diseases,
        crate::api::handlers::diseases::create_disease,
        crate::api::handlers::diseases::get_disease,
        crate::api::handlers::diseases::update_disease,
        crate::api::handlers::diseases::delete_disease,

        // Clinic endpoints
        crate::api::handlers::clinics::list_clinics,
        crate::api::handlers::clinics::create_clinic,
        crate::api::handlers::clinics::get_clinic,
        crate::api::handlers::clinics::update_clinic,
        crate::api::handlers::clinics::delete_clinic,
    ),
    components(
        schemas(
            // Domain entities
            medically_domain::entities::User,
            medically_domain::entities::Med,
            medically_domain::entities::Disease,
            medically_domain::entities::Clinic,
            medically_domain::entities::Message,

            // Response bodies
            crate::entities::common::DeleteResponse,
            crate::entities::common::CountResponse,
            crate::entities::common::MessageResponse,
        )
    ),
    tags(
        (name = "health", description = "Liveness and health endpoints"),
        (name = "messages", description = "Message upsert and count"),
        (name = "users", description = "User records"),
        (name = "meds", description = "Medication records"),
        (name = "diseases", description = "Disease records"),
        (name = "clinics", description = "Clinic records")
    ),
    info(
        title = "medically-core API",
        version = "0.1.0",
        description = "CRUD service for users, medications, diseases and clinics",
        license(
            name = "MIT",
            url = "https://opensource.org/licenses/MIT"
        ),
    ),
    servers(
        (url = "/", description = "Local development server")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_route_is_documented() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&str> = doc.paths.paths.keys().map(String::as_str).collect();

        for expected in [
            "/ping",
            "/health",
            "/count",
            "/add-message",
            "/user",
            "/user/{id}",
            "/med",
            "/med/{id}",
            "/disease",
            "/disease/{id}",
            "/clinic",
            "/clinic/{id}",
        ] {
            assert!(paths.contains(&expected), "missing path {}", expected);
        }
    }

    #[test]
    fn test_entity_schemas_are_registered() {
        let doc = ApiDoc::openapi();
        let components = doc.components.expect("components");
        for name in ["User", "Med", "Disease", "Clinic", "Message", "DeleteResponse"] {
            assert!(components.schemas.contains_key(name), "missing schema {}", name);
        }
    }
}
