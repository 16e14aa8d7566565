use std::sync::Arc;

use poem::{listener::TcpListener, middleware::Cors, EndpointExt, Route, Server};
use poem_openapi::OpenApiService;

use catalog_backend::api::{HealthApi, ItemsApi};
use catalog_backend::app_data::AppData;
use catalog_backend::config::{init_logging, ServerConfig};

#[tokio::main]
async fn main() -> Result<(), std::io::Error> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    init_logging().expect("Failed to initialize logging");

    let config = ServerConfig::from_env();

    // Create the main-owned stores and wire them into the API layer
    let app_data = Arc::new(AppData::init());
    let items_api = ItemsApi::new(app_data.item_store.clone());

    // Create OpenAPI service with API implementations
    let api_service = OpenApiService::new((HealthApi, items_api), "Item Catalog API", "1.0.0")
        .server(format!("http://localhost:{}", config.port));

    // Generate Swagger UI from OpenAPI service
    let ui = api_service.swagger_ui();

    // Compose routes: API at the root, Swagger UI under /swagger, and a
    // permissive CORS policy across the whole app
    let app = Route::new()
        .nest("/", api_service)
        .nest("/swagger", ui)
        .with(Cors::new());

    tracing::info!("Starting server on http://{}", config.bind_address());
    tracing::info!(
        "Swagger UI available at http://localhost:{}/swagger",
        config.port
    );

    Server::new(TcpListener::bind(config.bind_address()))
        .run(app)
        .await
}
