mod common;
mod dashboard;
mod error;
mod goals;
pub mod i18n;
mod matches;
mod players;
mod routes;
mod scorers;
mod settings;
mod table;
mod teams;
#[cfg(test)]
mod testing;
mod views;

pub use error::{ApiError, ApiResult};
pub use i18n::{I18n, I18nManager};
pub use settings::ServerSettings;

use crate::routes::ServerRoutes;
use axum::response::IntoResponse;
use chrono::{Local, NaiveDateTime};
use database::LeagueData;
use log::{error, info};
use std::io;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::sync::RwLock;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct LeagueServer {
    data: AppData,
    settings: ServerSettings,
}

impl LeagueServer {
    pub fn new(data: AppData, settings: ServerSettings) -> Self {
        LeagueServer { data, settings }
    }

    pub async fn run(&self) -> io::Result<()> {
        let app = ServerRoutes::create()
            .layer(
                ServiceBuilder::new()
                    .layer(CatchPanicLayer::custom(|_err| {
                        ApiError::InternalError("handler panicked".to_string()).into_response()
                    }))
            )
            .with_state(self.data.clone());

        let addr = self.settings.socket_addr();

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("listen at: http://{}", addr);

        if let Err(e) = axum::serve(listener, app).await {
            error!("Server error: {}", e);
            return Err(e);
        }

        Ok(())
    }
}

pub type Clock = Arc<dyn Fn() -> NaiveDateTime + Send + Sync>;

pub struct AppData {
    pub data: Arc<RwLock<LeagueData>>,
    pub i18n: Arc<I18nManager>,
    clock: Clock,
}

impl AppData {
    pub fn new(data: LeagueData) -> Self {
        AppData {
            data: Arc::new(RwLock::new(data)),
            i18n: Arc::new(I18nManager::new()),
            clock: Arc::new(|| Local::now().naive_local()),
        }
    }

    /// Replaces the local wall clock used for match status and fixtures.
    pub fn with_clock(mut self, clock: Clock) -> Self {
        self.clock = clock;
        self
    }

    pub fn now(&self) -> NaiveDateTime {
        (self.clock)()
    }
}

impl Clone for AppData {
    fn clone(&self) -> Self {
        AppData {
            data: Arc::clone(&self.data),
            i18n: Arc::clone(&self.i18n),
            clock: Arc::clone(&self.clock),
        }
    }
}
