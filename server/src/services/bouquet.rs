//! Bouquet persistence: store a document under a fresh slug, fetch it back.
//!
//! DESIGN
//! ======
//! A bouquet row is one whole document: items as JSONB, canvas settings as
//! plain columns. Slugs are generated here and the UNIQUE constraint is the
//! collision detector; on a unique violation we retry with a new slug up to
//! a fixed attempt budget instead of recursing forever.

use canvas::consts::DEFAULT_BG_COLOR;
use canvas::doc::{BackgroundArt, BouquetDocument};
use canvas::media::MediaItem;
use serde::Serialize;
use sqlx::PgPool;
use sqlx::types::Json;
use tracing::{info, warn};

use crate::services::slug::generate_slug;

const MAX_SLUG_ATTEMPTS: u32 = 4;
/// Newest-first page size for the public gallery.
const GALLERY_LIMIT: i64 = 100;

#[derive(Debug, thiserror::Error)]
pub enum BouquetError {
    #[error("persistence is not configured")]
    NotConfigured,
    #[error("bouquet has no items")]
    EmptyBouquet,
    #[error("bouquet not found: {0}")]
    NotFound(String),
    #[error("could not allocate a unique slug after {MAX_SLUG_ATTEMPTS} attempts")]
    SlugExhausted,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Store a document under a newly generated slug and return that slug.
///
/// # Errors
///
/// Returns `EmptyBouquet` for a document with no items, `SlugExhausted`
/// when every generated slug collided, or a database error.
pub async fn store_bouquet(pool: &PgPool, doc: &BouquetDocument) -> Result<String, BouquetError> {
    if !doc.can_save() {
        return Err(BouquetError::EmptyBouquet);
    }

    for attempt in 0..MAX_SLUG_ATTEMPTS {
        let slug = generate_slug();
        let result = sqlx::query(
            "INSERT INTO bouquets (slug, image_url, items, note, bg_color, from_name, to_name)
             VALUES ($1, $2, $3, $4, $5, $6, $7)",
        )
        .bind(&slug)
        .bind(doc.background.as_str())
        .bind(Json(&doc.items))
        .bind(doc.note.as_deref())
        .bind(&doc.bg_color)
        .bind(doc.from_name.as_deref())
        .bind(doc.to_name.as_deref())
        .execute(pool)
        .await;

        match result {
            Ok(_) => {
                info!(%slug, items = doc.len(), "bouquet stored");
                return Ok(slug);
            }
            Err(e) if is_unique_violation(&e) => {
                warn!(%slug, attempt, "slug collision, retrying");
            }
            Err(e) => return Err(e.into()),
        }
    }

    Err(BouquetError::SlugExhausted)
}

/// Fetch a stored bouquet by slug. The returned document carries the slug.
///
/// # Errors
///
/// Returns `NotFound` when no row matches, or a database error.
pub async fn fetch_bouquet(pool: &PgPool, slug: &str) -> Result<BouquetDocument, BouquetError> {
    let row = sqlx::query_as::<
        _,
        (
            Option<String>,
            Json<Vec<MediaItem>>,
            Option<String>,
            Option<String>,
            Option<String>,
            Option<String>,
        ),
    >(
        "SELECT image_url, items, note, bg_color, from_name, to_name
         FROM bouquets WHERE slug = $1",
    )
    .bind(slug)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| BouquetError::NotFound(slug.to_owned()))?;

    let (image_url, Json(items), note, bg_color, from_name, to_name) = row;
    let background = image_url
        .as_deref()
        .and_then(BackgroundArt::from_asset)
        .unwrap_or_default();

    Ok(BouquetDocument {
        items,
        background,
        bg_color: bg_color.unwrap_or_else(|| DEFAULT_BG_COLOR.to_owned()),
        note,
        from_name,
        to_name,
        slug: Some(slug.to_owned()),
    })
}

/// One gallery card: enough to render a bouquet preview and its share link.
#[derive(Debug, Clone, Serialize)]
pub struct BouquetSummary {
    pub slug: String,
    #[serde(rename = "image_url")]
    pub background: BackgroundArt,
    pub bg_color: String,
    pub items: Vec<MediaItem>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to_name: Option<String>,
    pub created_at: String,
}

/// List the most recently stored bouquets, newest first, for the gallery.
///
/// # Errors
///
/// Returns a database error if the query fails.
pub async fn list_bouquets(pool: &PgPool) -> Result<Vec<BouquetSummary>, BouquetError> {
    let rows = sqlx::query_as::<
        _,
        (
            String,
            Option<String>,
            Json<Vec<MediaItem>>,
            Option<String>,
            Option<String>,
            Option<String>,
            String,
        ),
    >(
        "SELECT slug, image_url, items, bg_color, from_name, to_name, created_at::text
         FROM bouquets ORDER BY created_at DESC LIMIT $1",
    )
    .bind(GALLERY_LIMIT)
    .fetch_all(pool)
    .await?;

    Ok(rows
        .into_iter()
        .map(|(slug, image_url, Json(items), bg_color, from_name, to_name, created_at)| BouquetSummary {
            slug,
            background: image_url
                .as_deref()
                .and_then(BackgroundArt::from_asset)
                .unwrap_or_default(),
            bg_color: bg_color.unwrap_or_else(|| DEFAULT_BG_COLOR.to_owned()),
            items,
            from_name,
            to_name,
            created_at,
        })
        .collect())
}

/// Build the public share link for a stored slug.
#[must_use]
pub fn share_url(base: &str, slug: &str) -> String {
    format!("{}/?b={slug}", base.trim_end_matches('/'))
}

fn is_unique_violation(error: &sqlx::Error) -> bool {
    match error {
        sqlx::Error::Database(db) => db.is_unique_violation(),
        _ => false,
    }
}

#[cfg(test)]
#[path = "bouquet_test.rs"]
mod tests;
