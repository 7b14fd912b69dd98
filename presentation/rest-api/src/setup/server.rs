use poem::{
    Endpoint, EndpointExt, IntoEndpoint, Route, Server as PoemServer, http::StatusCode, listener::TcpListener,
    middleware::Tracing,
};
use poem_openapi::{
    OpenApiService,
    error::{ParseParamError, ParseRequestPayloadError},
};
use tracing::info;

use crate::api::error::error_response;
use crate::api::{cart::routes::CartApi, health::routes::HealthApi, item::routes::ItemApi};
use crate::{config::app_config::AppConfig, setup::dependency_injection::DependencyContainer};

type CatalogApis = (HealthApi, ItemApi, CartApi);

pub struct Server;

impl Server {
    pub fn api_service(container: DependencyContainer) -> OpenApiService<CatalogApis, ()> {
        OpenApiService::new(
            (container.health_api, container.item_api, container.cart_api),
            "Catalog API",
            env!("CARGO_PKG_VERSION"),
        )
    }

    /// Answers query, path and body values that fail to parse with 422 instead of 400.
    pub fn with_validation_errors<E>(endpoint: E) -> impl Endpoint
    where
        E: IntoEndpoint,
        E::Endpoint: 'static,
    {
        endpoint
            .into_endpoint()
            .catch_error(|err: ParseParamError| async move {
                error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "ValidationError",
                    err.to_string(),
                )
            })
            .catch_error(|err: ParseRequestPayloadError| async move {
                error_response(
                    StatusCode::UNPROCESSABLE_ENTITY,
                    "ValidationError",
                    err.to_string(),
                )
            })
    }

    pub async fn run(config: AppConfig, container: DependencyContainer) -> anyhow::Result<()> {
        let addr = config.server.bind_address();
        let api_service = Self::api_service(container).server(config.server.base_url());
        let ui = api_service.swagger_ui();
        let spec = api_service.spec_endpoint();
        let app = Route::new()
            .nest("/", Self::with_validation_errors(api_service))
            .nest("/docs", ui)
            .nest("/openapi.json", spec)
            .with(config.cors_middleware())
            .with(Tracing);

        info!(address = %addr, "catalog listening");
        info!("Swagger UI at {}/docs", config.server.base_url());
        PoemServer::new(TcpListener::bind(&addr)).run(app).await?;
        Ok(())
    }
}

/// Client over a freshly wired container, so each test starts with empty stores.
#[cfg(test)]
pub(crate) fn test_client() -> poem::test::TestClient<Route> {
    let api_service = Server::api_service(DependencyContainer::new());
    let app = Route::new().nest("/", Server::with_validation_errors(api_service));
    poem::test::TestClient::new(app)
}
