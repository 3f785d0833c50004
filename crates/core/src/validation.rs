//! Shared validation rule set for blueprint documents.
//!
//! The same rules gate both wizard step advancement and server-side
//! persistence: [`validate_step`] simply filters [`validate_document`]'s
//! issues down to the sections owned by one step, so any document that
//! clears every step also clears the full check. Keep it that way --
//! divergence here means the form accepts what the endpoint rejects.

use serde::Serialize;
use validator::ValidateUrl;

use crate::blueprint::{BlueprintDocument, MainGoal};

// ---------------------------------------------------------------------------
// Field issues
// ---------------------------------------------------------------------------

/// A single field-scoped validation failure.
///
/// `path` is the dotted camelCase field path as it appears on the wire,
/// e.g. `identity.businessName`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldIssue {
    pub path: String,
    pub message: String,
}

impl FieldIssue {
    fn new(path: &str, message: impl Into<String>) -> Self {
        Self {
            path: path.to_string(),
            message: message.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// Wizard steps
// ---------------------------------------------------------------------------

/// The six ordered steps of the intake wizard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    Identity,
    Vision,
    LookFeel,
    ContentStructure,
    Technical,
    Confirmations,
}

/// Total number of wizard steps.
pub const TOTAL_STEPS: u8 = 6;

impl WizardStep {
    pub const FIRST: WizardStep = WizardStep::Identity;
    pub const LAST: WizardStep = WizardStep::Confirmations;

    /// All steps in wizard order.
    pub const ALL: [WizardStep; TOTAL_STEPS as usize] = [
        Self::Identity,
        Self::Vision,
        Self::LookFeel,
        Self::ContentStructure,
        Self::Technical,
        Self::Confirmations,
    ];

    /// Convert a 1-based step number to a `WizardStep`.
    pub fn from_number(n: u8) -> Option<Self> {
        match n {
            1 => Some(Self::Identity),
            2 => Some(Self::Vision),
            3 => Some(Self::LookFeel),
            4 => Some(Self::ContentStructure),
            5 => Some(Self::Technical),
            6 => Some(Self::Confirmations),
            _ => None,
        }
    }

    /// Convert to a 1-based step number.
    pub fn to_number(self) -> u8 {
        match self {
            Self::Identity => 1,
            Self::Vision => 2,
            Self::LookFeel => 3,
            Self::ContentStructure => 4,
            Self::Technical => 5,
            Self::Confirmations => 6,
        }
    }

    /// Human-readable label for the step.
    pub fn label(self) -> &'static str {
        match self {
            Self::Identity => "Identity",
            Self::Vision => "Vision",
            Self::LookFeel => "Look & Feel",
            Self::ContentStructure => "Content & Structure",
            Self::Technical => "Technical",
            Self::Confirmations => "Confirmations",
        }
    }

    /// The document section this step owns; used to scope validation
    /// issues to the step.
    pub fn section(self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Vision => "vision",
            Self::LookFeel => "look",
            Self::ContentStructure => "content",
            Self::Technical => "technical",
            Self::Confirmations => "confirmations",
        }
    }

    /// The step after this one, or `None` on the last step.
    pub fn next(self) -> Option<Self> {
        Self::from_number(self.to_number() + 1)
    }

    /// The step before this one, or `None` on the first step.
    pub fn previous(self) -> Option<Self> {
        self.to_number().checked_sub(1).and_then(Self::from_number)
    }

    pub fn is_last(self) -> bool {
        self == Self::LAST
    }
}

// ---------------------------------------------------------------------------
// Rule set
// ---------------------------------------------------------------------------

/// Maximum number of color preferences a client may pick.
pub const MAX_COLOR_PREFERENCES: usize = 5;

/// Minimum length of the free-text goal when `mainGoal` is `Other`.
pub const MIN_CUSTOM_GOAL_LEN: usize = 3;

/// Validate a complete document, returning every failed rule.
///
/// An empty result means the document may be persisted.
pub fn validate_document(doc: &BlueprintDocument) -> Vec<FieldIssue> {
    let mut issues = Vec::new();

    // -- identity --
    if doc.identity.business_name.trim().len() < 2 {
        issues.push(FieldIssue::new(
            "identity.businessName",
            "Business name is required",
        ));
    }
    if doc.identity.what_you_sell.trim().len() < 3 {
        issues.push(FieldIssue::new(
            "identity.whatYouSell",
            "Tell us what you sell",
        ));
    }
    if doc.identity.brand_personality.is_empty() {
        issues.push(FieldIssue::new(
            "identity.brandPersonality",
            "Pick at least one brand personality",
        ));
    }

    // -- vision --
    if doc.vision.main_goal == MainGoal::Other {
        let custom = doc
            .vision
            .custom_main_goal
            .as_deref()
            .map(str::trim)
            .unwrap_or("");
        if custom.len() < MIN_CUSTOM_GOAL_LEN {
            issues.push(FieldIssue::new(
                "vision.customMainGoal",
                "Please describe your main goal (min 3 characters)",
            ));
        }
    }

    // -- look --
    if doc.look.color_preference.len() > MAX_COLOR_PREFERENCES {
        issues.push(FieldIssue::new(
            "look.colorPreference",
            "You can add up to 5 colors",
        ));
    }

    // -- content --
    if doc.content.pages.is_empty() {
        issues.push(FieldIssue::new(
            "content.pages",
            "Select or add at least one page",
        ));
    }
    if doc.content.cta_destination.trim().len() < 5 {
        issues.push(FieldIssue::new(
            "content.ctaDestination",
            "Where should your CTAs point?",
        ));
    }

    // -- technical --
    if let Some(site) = doc.technical.current_site.as_deref() {
        if !site.is_empty() && !site.validate_url() {
            issues.push(FieldIssue::new(
                "technical.currentSite",
                "Enter a valid URL",
            ));
        }
    }

    // -- confirmations --
    if !doc.confirmations.terms_accepted {
        issues.push(FieldIssue::new(
            "confirmations.termsAccepted",
            "Please accept the terms and conditions to continue",
        ));
    }

    issues
}

/// Validate only the fields owned by one wizard step.
///
/// Used to gate `Next` so clients fix errors incrementally instead of
/// facing a wall of errors at submit time.
pub fn validate_step(doc: &BlueprintDocument, step: WizardStep) -> Vec<FieldIssue> {
    let section = step.section();
    validate_document(doc)
        .into_iter()
        .filter(|issue| {
            issue
                .path
                .split('.')
                .next()
                .is_some_and(|prefix| prefix == section)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::blueprint::{BlueprintDocument, DomainStatus, MainGoal};

    /// A minimally valid document, matching the intake scenario used
    /// throughout the integration tests.
    fn valid_document() -> BlueprintDocument {
        let mut doc = BlueprintDocument::default();
        doc.identity.business_name = "Acme Studio".into();
        doc.identity.what_you_sell = "Branding services".into();
        doc.content.pages = vec!["Home".into(), "Contact".into()];
        doc.content.cta_destination = "hello@acme.test".into();
        doc.confirmations.terms_accepted = true;
        doc
    }

    #[test]
    fn valid_document_has_no_issues() {
        assert!(validate_document(&valid_document()).is_empty());
    }

    #[test]
    fn empty_business_name_is_rejected() {
        let mut doc = valid_document();
        doc.identity.business_name = " ".into();
        let issues = validate_document(&doc);
        assert!(issues.iter().any(|i| i.path == "identity.businessName"));
    }

    #[test]
    fn other_goal_requires_custom_text() {
        let mut doc = valid_document();
        doc.vision.main_goal = MainGoal::Other;
        doc.vision.custom_main_goal = Some(String::new());

        let issues = validate_step(&doc, WizardStep::Vision);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "vision.customMainGoal");
    }

    #[test]
    fn other_goal_with_short_custom_text_is_rejected() {
        let mut doc = valid_document();
        doc.vision.main_goal = MainGoal::Other;
        doc.vision.custom_main_goal = Some("ab".into());
        assert!(!validate_step(&doc, WizardStep::Vision).is_empty());
    }

    #[test]
    fn other_goal_with_custom_text_is_accepted() {
        let mut doc = valid_document();
        doc.vision.main_goal = MainGoal::Other;
        doc.vision.custom_main_goal = Some("Community building".into());
        assert!(validate_document(&doc).is_empty());
    }

    #[test]
    fn too_many_colors_is_rejected() {
        let mut doc = valid_document();
        doc.look.color_preference = (0..6).map(|i| format!("#00000{i}")).collect();
        let issues = validate_step(&doc, WizardStep::LookFeel);
        assert!(issues.iter().any(|i| i.path == "look.colorPreference"));
    }

    #[test]
    fn empty_pages_is_rejected() {
        let mut doc = valid_document();
        doc.content.pages.clear();
        assert!(!validate_step(&doc, WizardStep::ContentStructure).is_empty());
    }

    #[test]
    fn short_cta_destination_is_rejected() {
        let mut doc = valid_document();
        doc.content.cta_destination = "a@b".into();
        let issues = validate_step(&doc, WizardStep::ContentStructure);
        assert!(issues.iter().any(|i| i.path == "content.ctaDestination"));
    }

    #[test]
    fn invalid_current_site_url_is_rejected() {
        let mut doc = valid_document();
        doc.technical.current_site = Some("not-a-url".into());
        let issues = validate_step(&doc, WizardStep::Technical);
        assert!(issues.iter().any(|i| i.path == "technical.currentSite"));
    }

    #[test]
    fn empty_current_site_is_accepted() {
        let mut doc = valid_document();
        doc.technical.current_site = Some(String::new());
        assert!(validate_document(&doc).is_empty());

        doc.technical.current_site = Some("https://current-site.com".into());
        assert!(validate_document(&doc).is_empty());
        let _ = DomainStatus::Need;
    }

    #[test]
    fn unaccepted_terms_is_rejected() {
        let mut doc = valid_document();
        doc.confirmations.terms_accepted = false;
        let issues = validate_step(&doc, WizardStep::Confirmations);
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "confirmations.termsAccepted");
    }

    /// Rule-set parity: a document whose every step validates clean must
    /// also pass full-document validation.
    #[test]
    fn per_step_validation_covers_the_full_rule_set() {
        let mut doc = valid_document();
        doc.vision.main_goal = MainGoal::Other;
        doc.vision.custom_main_goal = None;
        doc.content.cta_destination = "x".into();

        let full = validate_document(&doc);
        let stepped: Vec<_> = WizardStep::ALL
            .iter()
            .flat_map(|&step| validate_step(&doc, step))
            .collect();

        assert_eq!(full, stepped);
    }

    // -- WizardStep --

    #[test]
    fn step_number_round_trip() {
        for n in 1..=TOTAL_STEPS {
            assert_eq!(WizardStep::from_number(n).unwrap().to_number(), n);
        }
        assert!(WizardStep::from_number(0).is_none());
        assert!(WizardStep::from_number(7).is_none());
    }

    #[test]
    fn step_ordering_is_linear() {
        assert_eq!(WizardStep::FIRST.previous(), None);
        assert_eq!(WizardStep::LAST.next(), None);
        assert_eq!(WizardStep::Identity.next(), Some(WizardStep::Vision));
        assert_eq!(WizardStep::Vision.previous(), Some(WizardStep::Identity));
        assert!(WizardStep::LAST.is_last());
    }

    #[test]
    fn step_labels_are_nonempty() {
        for step in WizardStep::ALL {
            assert!(!step.label().is_empty());
            assert!(!step.section().is_empty());
        }
    }
}
