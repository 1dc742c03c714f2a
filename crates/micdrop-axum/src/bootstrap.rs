//! Axum server bootstrap - the composition root.
//!
//! This module is the ONLY place where infrastructure is wired together.
//! All concrete implementations are instantiated here.

use std::sync::Arc;

use anyhow::Result;

use micdrop_ai::{AiClientConfig, AiHealthCheck, AzureOpenAiClient};
use micdrop_core::Settings;
use micdrop_core::ports::{
    DebateAi, DebateEventEmitter, NewsProvider, RapperRepository, SharedServiceFactory,
    SpeechSynthesizer, Translator,
};
use micdrop_core::services::{
    DebateOrchestrator, DiagnosticsService, LyricsService, TopicsService, TranslationService,
};
use micdrop_core::validate_settings;
use micdrop_db::{SqliteRapperRepository, StorageHealthCheck, setup_database};
use micdrop_news::{NewsApiClient, NewsHealthCheck};
use micdrop_speech::{SpeechClient, SpeechClientConfig, SpeechHealthCheck};

use crate::routes::create_router;
use crate::sse::SseBroadcaster;

/// Application context for the Axum adapter.
///
/// Holds all initialized services for the web server.
pub struct AxumContext {
    /// The debate orchestrator - the single owner of the session state.
    pub orchestrator: Arc<DebateOrchestrator>,
    /// Win/loss store.
    pub rappers: Arc<dyn RapperRepository>,
    /// Speech synthesizer (also serves the standalone synthesis endpoint).
    pub speech: Arc<dyn SpeechSynthesizer>,
    /// Victorian English translation with caching.
    pub translation: Arc<TranslationService>,
    /// Song lyrics lookup.
    pub lyrics: Arc<LyricsService>,
    /// Topic suggestions from news headlines.
    pub topics: Arc<TopicsService>,
    /// Health checks over the external collaborators.
    pub diagnostics: Arc<DiagnosticsService>,
    /// SSE broadcaster for real-time debate snapshots.
    pub sse: Arc<SseBroadcaster>,
}

/// Bootstrap all services from settings.
pub async fn bootstrap(settings: Settings) -> Result<AxumContext> {
    validate_settings(&settings)?;

    // 1. Storage
    let pool = setup_database(settings.effective_database_path()).await?;
    let rappers: Arc<dyn RapperRepository> =
        Arc::new(SqliteRapperRepository::new(pool.clone()));
    if let Err(err) = rappers.seed_defaults().await {
        tracing::warn!(%err, "failed to seed rapper roster");
    }

    // 2. External clients
    let ai = Arc::new(AzureOpenAiClient::new(AiClientConfig::from_settings(
        &settings,
    ))?);
    let speech = Arc::new(SpeechClient::new(SpeechClientConfig::from_settings(
        &settings,
    ))?);
    let news = Arc::new(NewsApiClient::new(settings.news_api_key.clone())?);

    // 3. Broadcast channel and the orchestrator over it
    let sse = Arc::new(SseBroadcaster::with_defaults());
    let factory = Arc::new(SharedServiceFactory::new(
        Arc::clone(&ai) as Arc<dyn DebateAi>,
        Arc::clone(&speech) as Arc<dyn SpeechSynthesizer>,
        Arc::clone(&rappers),
    ));
    let orchestrator = Arc::new(DebateOrchestrator::new(
        factory,
        Arc::clone(&sse) as Arc<dyn DebateEventEmitter>,
    ));

    // 4. Surrounding services
    let translation = Arc::new(TranslationService::new(
        Arc::clone(&ai) as Arc<dyn Translator>
    ));
    let lyrics = Arc::new(LyricsService::new(settings.effective_lyrics_path()));
    let topics = Arc::new(TopicsService::new(
        Arc::clone(&news) as Arc<dyn NewsProvider>
    ));
    let diagnostics = Arc::new(
        DiagnosticsService::new()
            .with_check(Arc::new(AiHealthCheck::new(Arc::clone(&ai))))
            .with_check(Arc::new(SpeechHealthCheck::new(Arc::clone(&speech))))
            .with_check(Arc::new(StorageHealthCheck::new(pool)))
            .with_check(Arc::new(NewsHealthCheck::new(Arc::clone(&news)))),
    );

    Ok(AxumContext {
        orchestrator,
        rappers,
        speech,
        translation,
        lyrics,
        topics,
        diagnostics,
        sse,
    })
}

/// Bootstrap and serve until shutdown.
pub async fn start_server(settings: Settings) -> Result<()> {
    let port = settings.effective_http_port();
    let ctx = bootstrap(settings).await?;
    let app = create_router(ctx);

    let listener = tokio::net::TcpListener::bind(("0.0.0.0", port)).await?;
    tracing::info!(port, "micdrop listening");
    axum::serve(listener, app).await?;
    Ok(())
}
