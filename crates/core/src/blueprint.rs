//! The blueprint intake document.
//!
//! A [`BlueprintDocument`] is the structured description of the website a
//! prospective client wants built. It is assembled incrementally by the
//! wizard, submitted once as an atomic payload, and never mutated after
//! persistence. Field names serialize in camelCase to match the wire
//! format the intake form produces.

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

/// The primary goal a client wants their website to achieve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MainGoal {
    Leads,
    Bookings,
    Trust,
    Portfolio,
    Sell,
    /// Free-text goal; requires `vision.customMainGoal` to be filled in.
    Other,
}

impl MainGoal {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Leads => "Leads",
            Self::Bookings => "Bookings",
            Self::Trust => "Trust",
            Self::Portfolio => "Portfolio",
            Self::Sell => "Sell",
            Self::Other => "Other",
        }
    }
}

/// Whether the client already owns a domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DomainStatus {
    Have,
    Need,
}

impl DomainStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Have => "have",
            Self::Need => "need",
        }
    }

    /// Parse a status string from the database.
    pub fn from_str_db(s: &str) -> Result<Self, CoreError> {
        match s {
            "have" => Ok(Self::Have),
            "need" => Ok(Self::Need),
            _ => Err(CoreError::Validation(format!(
                "Invalid domain status '{s}'. Must be one of: have, need"
            ))),
        }
    }
}

/// A website the client likes, used as a design reference.
///
/// Template selections in the wizard are stored as references too, with
/// the template's public URL and a generated note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceSite {
    pub url: String,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Business identity section (wizard step 1).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub business_name: String,
    #[serde(default)]
    pub one_liner: Option<String>,
    pub what_you_sell: String,
    pub brand_personality: Vec<String>,
}

/// Website goal section (wizard step 2).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Vision {
    pub main_goal: MainGoal,
    #[serde(default)]
    pub custom_main_goal: Option<String>,
}

/// Design preferences section (wizard step 3).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Look {
    #[serde(default)]
    pub references: Vec<ReferenceSite>,
    #[serde(default)]
    pub color_preference: Vec<String>,
    #[serde(default)]
    pub imagery_vibe: Vec<String>,
    #[serde(default)]
    pub assets_note: String,
    /// URLs returned by the upload endpoint for brand assets.
    #[serde(default)]
    pub asset_uploads: Vec<String>,
}

/// Page structure section (wizard step 4).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Content {
    pub pages: Vec<String>,
    pub cta_destination: String,
}

/// Technical requirements section (wizard step 5).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Technical {
    pub domain_status: DomainStatus,
    #[serde(default)]
    pub current_site: Option<String>,
    #[serde(default)]
    pub integrations: Vec<String>,
}

/// Final confirmations section (wizard step 6).
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Confirmations {
    pub terms_accepted: bool,
}

/// The complete intake document produced by the wizard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BlueprintDocument {
    pub identity: Identity,
    pub vision: Vision,
    pub look: Look,
    pub content: Content,
    pub technical: Technical,
    pub confirmations: Confirmations,
}

impl Default for BlueprintDocument {
    /// Seed values the intake form starts with.
    fn default() -> Self {
        Self {
            identity: Identity {
                business_name: String::new(),
                one_liner: None,
                what_you_sell: String::new(),
                brand_personality: vec!["Bold".to_string()],
            },
            vision: Vision {
                main_goal: MainGoal::Leads,
                custom_main_goal: None,
            },
            look: Look {
                references: Vec::new(),
                color_preference: Vec::new(),
                imagery_vibe: Vec::new(),
                assets_note: String::new(),
                asset_uploads: Vec::new(),
            },
            content: Content {
                pages: ["Home", "About", "Services", "Pricing", "Contact"]
                    .map(String::from)
                    .to_vec(),
                cta_destination: String::new(),
            },
            technical: Technical {
                domain_status: DomainStatus::Have,
                current_site: None,
                integrations: Vec::new(),
            },
            confirmations: Confirmations {
                terms_accepted: false,
            },
        }
    }
}
