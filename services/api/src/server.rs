use std::sync::atomic::Ordering;
use std::sync::Arc;

use axum::Extension;
use axum_prometheus::PrometheusMetricLayer;
use tracing::info;

use member_admin::config::AppConfig;
use member_admin::error::AppError;
use member_admin::portal::applications::AdminPortalService;
use member_admin::telemetry;

use crate::cli::ServeArgs;
use crate::infra::{
    AppState, InMemoryApplicationGateway, InMemoryDocumentStore, StaticLookupProvider,
};
use crate::routes::with_portal_routes;

pub(crate) async fn run(mut args: ServeArgs) -> Result<(), AppError> {
    let mut config = AppConfig::load()?;

    if let Some(host) = args.host.take() {
        config.server.host = host;
    }
    if let Some(port) = args.port.take() {
        config.server.port = port;
    }

    telemetry::init(&config.telemetry)?;

    let (prometheus_layer, prometheus_handle) = PrometheusMetricLayer::pair();
    let readiness_flag = Arc::new(std::sync::atomic::AtomicBool::new(false));
    let app_state = AppState {
        readiness: readiness_flag.clone(),
        metrics: Arc::new(prometheus_handle),
    };

    let service = Arc::new(AdminPortalService::new(
        Arc::new(InMemoryApplicationGateway::seeded()),
        Arc::new(StaticLookupProvider),
        Arc::new(InMemoryDocumentStore::default()),
    ));

    let app = with_portal_routes(service)
        .layer(Extension(app_state))
        .layer(prometheus_layer);

    let addr = config.server.socket_addr()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    readiness_flag.store(true, Ordering::Release);

    info!(?config.environment, %addr, "membership admin portal ready");

    axum::serve(listener, app).await?;
    Ok(())
}
