//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and
//! REST API. Services are generic over the invoker/snapshot/credential
//! traits, but AppState pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use dashmap::DashMap;
use secrecy::SecretString;

use sellcraft_core::service::creator::CreatorService;
use sellcraft_core::service::promoter::PromoterService;
use sellcraft_core::service::surveyor::SurveyorService;
use sellcraft_infra::config::{data_dir, load_app_config, model_ids};
use sellcraft_infra::llm::gemini::GeminiInvoker;
use sellcraft_infra::secret::EnvCredentialGate;
use sellcraft_infra::sqlite::{DatabasePool, SqliteSnapshotStore};
use sellcraft_types::config::AppConfig;

/// Concrete type aliases for the service generics pinned to infra
/// implementations.
pub type ConcreteCreatorService =
    CreatorService<GeminiInvoker, SqliteSnapshotStore, EnvCredentialGate>;

pub type ConcretePromoterService = PromoterService<GeminiInvoker, EnvCredentialGate>;

pub type ConcreteSurveyorService = SurveyorService<GeminiInvoker, EnvCredentialGate>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub creator: Arc<ConcreteCreatorService>,
    pub promoter: Arc<ConcretePromoterService>,
    pub surveyor: Arc<ConcreteSurveyorService>,
    pub config: AppConfig,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
    /// Tools with a generation round currently in flight, keyed by tool
    /// name. A second submission for the same tool is rejected with 409.
    pub in_flight: Arc<DashMap<&'static str, ()>>,
}

impl AppState {
    /// Initialize the application state: connect to DB, wire services,
    /// restore the saved wizard state.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = load_app_config(&data_dir).await;
        let models = model_ids(&config);

        // Initialize database
        let db_url = format!(
            "sqlite://{}?mode=rwc",
            data_dir.join("sellcraft.db").display()
        );
        let db_pool = DatabasePool::new(&db_url).await?;
        let store = SqliteSnapshotStore::new(db_pool.clone());

        // The invoker still gets built when no key is present; the
        // credential gate stops any call from going out in that case.
        let api_key = EnvCredentialGate::new()
            .api_key()
            .unwrap_or_else(|| SecretString::from(""));

        let creator = CreatorService::new(
            GeminiInvoker::new(api_key.clone()),
            store,
            EnvCredentialGate::new(),
            models.clone(),
        );
        let promoter = PromoterService::new(
            GeminiInvoker::new(api_key.clone()),
            EnvCredentialGate::new(),
            models.clone(),
        );
        let surveyor = SurveyorService::new(
            GeminiInvoker::new(api_key),
            EnvCredentialGate::new(),
            models,
        );

        // Resume at the Ideas step when a previous round was saved.
        let restored = creator.restore().await;
        tracing::info!(
            step = %restored.step,
            ideas = restored.ideas.len(),
            "wizard state restored"
        );

        Ok(Self {
            creator: Arc::new(creator),
            promoter: Arc::new(promoter),
            surveyor: Arc::new(surveyor),
            config,
            data_dir,
            db_pool,
            in_flight: Arc::new(DashMap::new()),
        })
    }
}
