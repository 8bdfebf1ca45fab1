pub mod errors;
pub mod extract;
pub mod handlers;
pub mod routes;
pub mod state;

pub use errors::ApiError;
pub use extract::JsonBody;
pub use routes::create_router;
pub use state::AppState;
