use crate::cli::open_store;
use crate::models::PostDraft;
use crate::services::editor::{requested_slug, AdminSession, EditorError};
use crate::Config;
use anyhow::Result;
use std::path::Path;
use std::sync::Arc;

#[derive(Debug, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub created: usize,
    pub updated: usize,
    pub skipped: usize,
}

pub async fn run(config_path: &Path, file: &Path, overwrite: bool) -> Result<()> {
    let config = Config::load(config_path)?;
    let store = open_store(&config)?;

    let raw = std::fs::read_to_string(file)
        .map_err(|e| anyhow::anyhow!("Could not read '{}': {}", file.display(), e))?;
    let drafts: Vec<PostDraft> = serde_json::from_str(&raw)?;

    let mut session = AdminSession::open(Arc::new(store), config)?;
    let summary = import_drafts(&mut session, drafts, overwrite)?;

    tracing::info!(
        "Import complete: {} created, {} updated, {} skipped",
        summary.created,
        summary.updated,
        summary.skipped
    );
    Ok(())
}

/// Saves each draft through the session. Drafts that fail validation are
/// skipped; storage failures abort the import.
pub fn import_drafts(
    session: &mut AdminSession,
    drafts: Vec<PostDraft>,
    overwrite: bool,
) -> Result<ImportSummary> {
    let mut summary = ImportSummary::default();

    for draft in drafts {
        let existing_id = if overwrite {
            let wanted = requested_slug(&draft.title, draft.slug.as_deref(), session.config());
            session
                .posts()
                .iter()
                .find(|p| p.slug == wanted)
                .map(|p| p.id.clone())
        } else {
            None
        };

        match &existing_id {
            Some(id) => {
                session.begin_edit(id)?;
            }
            None => session.begin_new(),
        }

        let title = draft.title.clone();
        match session.save(draft) {
            Ok(post) => {
                tracing::info!("Imported: {} -> /{}", post.title, post.slug);
                if existing_id.is_some() {
                    summary.updated += 1;
                } else {
                    summary.created += 1;
                }
            }
            Err(EditorError::Validation(msg)) => {
                tracing::warn!("Skipped '{}': {}", title, msg);
                session.cancel();
                summary.skipped += 1;
            }
            Err(e) => return Err(e.into()),
        }
    }

    Ok(summary)
}
