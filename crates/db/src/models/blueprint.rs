//! Blueprint submission row model.

use serde::Serialize;
use sqlx::FromRow;
use webform_core::types::{DbId, Timestamp};

/// A persisted blueprint submission.
///
/// The normalized columns exist for reporting queries; `full_data` holds
/// the document exactly as submitted. Rows are never updated.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Blueprint {
    pub id: DbId,
    pub business_name: String,
    pub one_liner: Option<String>,
    pub what_you_sell: String,
    pub brand_personality: Vec<String>,
    pub main_goal: String,
    pub custom_main_goal: Option<String>,
    pub reference_sites: serde_json::Value,
    pub color_preference: Vec<String>,
    pub imagery_vibe: Vec<String>,
    pub assets_note: String,
    pub asset_uploads: Vec<String>,
    pub pages: Vec<String>,
    pub cta_destination: String,
    pub domain_status: String,
    pub current_site: Option<String>,
    pub integrations: Vec<String>,
    pub terms_accepted: bool,
    pub full_data: serde_json::Value,
    pub created_at: Timestamp,
}
