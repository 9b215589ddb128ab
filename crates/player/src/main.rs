//! pde-preview - render a document's tooltip from a JSON document dump.
//!
//! Usage: `pde-preview <documents.json> <uuid>`

use std::sync::Arc;

use anyhow::{bail, Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pde_domain::DocumentUuid;
use pde_player::application::{HeaderOverrides, TooltipService};
use pde_player::infrastructure::document_store::JsonDocumentStore;
use pde_player::infrastructure::localization::StaticLocalizer;
use pde_player::infrastructure::settings_store::InMemorySettings;
use pde_player::infrastructure::systems::{seed_settings, SystemRegistry};
use pde_player::infrastructure::PlayerConfig;
use pde_player::ports::outbound::{Localizer, SettingsPort};

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pde_player=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let mut args = std::env::args().skip(1);
    let (Some(documents_path), Some(raw_uuid)) = (args.next(), args.next()) else {
        bail!("usage: pde-preview <documents.json> <uuid>");
    };

    let config = PlayerConfig::from_env()?;
    tracing::info!(user_id = %config.user_id, system_id = %config.system_id, "Starting pde-preview");

    let store = JsonDocumentStore::from_path(&documents_path)
        .with_context(|| format!("Failed to load documents from {documents_path}"))?;
    tracing::info!(documents = store.len(), "Documents loaded");

    let localizer: Arc<dyn Localizer> = Arc::new(StaticLocalizer::english());
    let system = SystemRegistry::new(Vec::new(), Arc::clone(&localizer)).select(&config.system_id);
    let settings: Arc<dyn SettingsPort> = Arc::new(InMemorySettings::default());
    seed_settings(system.as_ref(), settings.as_ref())
        .await
        .context("Failed to seed module settings")?;

    let service = TooltipService::new(Arc::new(store), settings, localizer, system);
    let uuid = DocumentUuid::parse(&raw_uuid).context("Invalid document uuid")?;

    let Some(content) = service.content_for_uuid(&uuid, &HeaderOverrides::default()).await else {
        bail!("No document found for {uuid}");
    };

    println!("<!-- header -->\n{}", content.header.trim());
    if let Some(details) = &content.details {
        println!("<!-- details -->\n{details}");
    }
    println!("<!-- description -->\n{}", content.description);
    Ok(())
}
