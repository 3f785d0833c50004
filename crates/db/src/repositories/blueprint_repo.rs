//! Repository for the `blueprints` table.

use sqlx::PgPool;
use webform_core::blueprint::BlueprintDocument;
use webform_core::types::DbId;

use crate::models::blueprint::Blueprint;

/// Provides insert and count operations for blueprint submissions.
///
/// Submissions are write-once: there are no update or delete methods.
pub struct BlueprintRepo;

impl BlueprintRepo {
    /// Persist a validated document as one row, returning the new ID.
    ///
    /// Normalized columns are extracted for reporting; `full_data`
    /// carries the document verbatim.
    pub async fn create(pool: &PgPool, doc: &BlueprintDocument) -> Result<DbId, sqlx::Error> {
        let reference_sites = serde_json::to_value(&doc.look.references)
            .map_err(|e| sqlx::Error::Encode(Box::new(e)))?;
        let full_data =
            serde_json::to_value(doc).map_err(|e| sqlx::Error::Encode(Box::new(e)))?;

        let (id,): (DbId,) = sqlx::query_as(
            "INSERT INTO blueprints (
                business_name, one_liner, what_you_sell, brand_personality,
                main_goal, custom_main_goal,
                reference_sites, color_preference, imagery_vibe, assets_note, asset_uploads,
                pages, cta_destination,
                domain_status, current_site, integrations,
                terms_accepted, full_data
             )
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10, $11, $12, $13, $14, $15, $16, $17, $18)
             RETURNING id",
        )
        .bind(&doc.identity.business_name)
        .bind(&doc.identity.one_liner)
        .bind(&doc.identity.what_you_sell)
        .bind(&doc.identity.brand_personality)
        .bind(doc.vision.main_goal.as_str())
        .bind(&doc.vision.custom_main_goal)
        .bind(reference_sites)
        .bind(&doc.look.color_preference)
        .bind(&doc.look.imagery_vibe)
        .bind(&doc.look.assets_note)
        .bind(&doc.look.asset_uploads)
        .bind(&doc.content.pages)
        .bind(&doc.content.cta_destination)
        .bind(doc.technical.domain_status.as_str())
        .bind(&doc.technical.current_site)
        .bind(&doc.technical.integrations)
        .bind(doc.confirmations.terms_accepted)
        .bind(full_data)
        .fetch_one(pool)
        .await?;

        Ok(id)
    }

    /// Fetch a persisted submission by ID.
    pub async fn find_by_id(pool: &PgPool, id: DbId) -> Result<Option<Blueprint>, sqlx::Error> {
        sqlx::query_as::<_, Blueprint>(
            "SELECT id, business_name, one_liner, what_you_sell, brand_personality,
                    main_goal, custom_main_goal,
                    reference_sites, color_preference, imagery_vibe, assets_note, asset_uploads,
                    pages, cta_destination,
                    domain_status, current_site, integrations,
                    terms_accepted, full_data, created_at
             FROM blueprints WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(pool)
        .await
    }

    /// Total number of persisted submissions.
    pub async fn count(pool: &PgPool) -> Result<i64, sqlx::Error> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM blueprints")
            .fetch_one(pool)
            .await?;
        Ok(count)
    }
}
