//! The blueprint intake wizard state machine.
//!
//! [`BlueprintWizard`] owns the in-progress document and the current
//! step, and is the only writer of wizard state -- there is no ambient
//! global form state. Step advancement is gated on the step's slice of
//! the shared rule set; the full rule set runs again at submit time and
//! once more server-side, which remains authoritative.

use std::future::Future;

use futures::future::join_all;

use crate::blueprint::{BlueprintDocument, ReferenceSite};
use crate::templates::Template;
use crate::validation::{validate_document, validate_step, FieldIssue, WizardStep};

/// Maximum number of design references (manual or template-derived).
pub const MAX_REFERENCES: usize = 3;

/// Where the wizard is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WizardPhase {
    /// The client is still filling in steps.
    Editing,
    /// Full-document validation passed and the document was handed to
    /// the submission endpoint.
    Submitted,
    /// The endpoint rejected or failed the submission; entered data is
    /// retained and `submit` may be retried.
    Failed,
}

/// Outcome of toggling a template selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateToggle {
    Added,
    Removed,
}

/// User-facing failures raised by wizard operations.
#[derive(Debug, thiserror::Error)]
pub enum WizardError {
    #[error("Validation failed for {} field(s)", .0.len())]
    Invalid(Vec<FieldIssue>),

    #[error("You can pick up to 3 templates. Remove one to add another.")]
    ReferenceLimit,

    #[error("Page name cannot be empty")]
    EmptyPage,

    #[error("'{0}' is already in your page list")]
    DuplicatePage(String),

    #[error("Submit is only available on the final step")]
    NotOnFinalStep,

    #[error("{failed} of {total} uploads failed. Please try the batch again.")]
    UploadBatch { failed: usize, total: usize },
}

/// The six-step intake wizard.
#[derive(Debug, Clone)]
pub struct BlueprintWizard {
    step: WizardStep,
    phase: WizardPhase,
    values: BlueprintDocument,
}

impl Default for BlueprintWizard {
    fn default() -> Self {
        Self::new()
    }
}

impl BlueprintWizard {
    /// Start a fresh wizard with the form's seed values.
    pub fn new() -> Self {
        Self::with_values(BlueprintDocument::default())
    }

    /// Resume a wizard from previously entered values (e.g. restored
    /// from client-side storage).
    pub fn with_values(values: BlueprintDocument) -> Self {
        Self {
            step: WizardStep::FIRST,
            phase: WizardPhase::Editing,
            values,
        }
    }

    pub fn step(&self) -> WizardStep {
        self.step
    }

    pub fn phase(&self) -> WizardPhase {
        self.phase
    }

    pub fn values(&self) -> &BlueprintDocument {
        &self.values
    }

    /// Direct field access for form bindings. Structural edits (template
    /// selection, page tags, uploads) go through the typed operations
    /// below so their invariants hold.
    pub fn values_mut(&mut self) -> &mut BlueprintDocument {
        &mut self.values
    }

    // -----------------------------------------------------------------
    // Step transitions
    // -----------------------------------------------------------------

    /// Advance to the next step if the current step's fields validate.
    ///
    /// On failure the wizard stays put and the caller gets the
    /// field-level issues to surface. Advancing past the last step is a
    /// no-op (submission is a separate operation).
    pub fn next(&mut self) -> Result<WizardStep, WizardError> {
        let issues = validate_step(&self.values, self.step);
        if !issues.is_empty() {
            return Err(WizardError::Invalid(issues));
        }
        self.step = self.step.next().unwrap_or(self.step);
        Ok(self.step)
    }

    /// Go back one step. Never validates, never fails; clamped at the
    /// first step.
    pub fn previous(&mut self) -> WizardStep {
        self.step = self.step.previous().unwrap_or(self.step);
        self.step
    }

    /// Run full-document validation and move to the `Submitted` phase.
    ///
    /// Only available on the final step. On validation failure the
    /// wizard stays on the final step with its data intact. A wizard in
    /// the `Failed` phase (endpoint error) may submit again.
    pub fn submit(&mut self) -> Result<&BlueprintDocument, WizardError> {
        if !self.step.is_last() {
            return Err(WizardError::NotOnFinalStep);
        }
        let issues = validate_document(&self.values);
        if !issues.is_empty() {
            return Err(WizardError::Invalid(issues));
        }
        self.phase = WizardPhase::Submitted;
        Ok(&self.values)
    }

    /// Record that the submission endpoint failed. The document is
    /// retained so `submit` can be retried.
    pub fn mark_failed(&mut self) {
        if self.phase == WizardPhase::Submitted {
            self.phase = WizardPhase::Failed;
        }
    }

    // -----------------------------------------------------------------
    // Template selection
    // -----------------------------------------------------------------

    /// Toggle a template in `look.references`.
    ///
    /// Selecting adds `{url, "<name> (WebForm template)"}`; selecting the
    /// same template again removes it. Adding is rejected once
    /// [`MAX_REFERENCES`] references exist, with no state change.
    pub fn toggle_template(&mut self, template: &Template) -> Result<TemplateToggle, WizardError> {
        let refs = &mut self.values.look.references;

        if let Some(pos) = refs.iter().position(|r| r.url == template.url) {
            refs.remove(pos);
            return Ok(TemplateToggle::Removed);
        }

        if refs.len() >= MAX_REFERENCES {
            return Err(WizardError::ReferenceLimit);
        }

        refs.push(ReferenceSite {
            url: template.url.to_string(),
            notes: Some(template.reference_notes()),
        });
        Ok(TemplateToggle::Added)
    }

    /// Add a manually entered reference site, subject to the same cap.
    pub fn add_reference(&mut self, site: ReferenceSite) -> Result<(), WizardError> {
        if self.values.look.references.len() >= MAX_REFERENCES {
            return Err(WizardError::ReferenceLimit);
        }
        self.values.look.references.push(site);
        Ok(())
    }

    // -----------------------------------------------------------------
    // Page tags
    // -----------------------------------------------------------------

    /// Append a custom page tag to `content.pages`.
    ///
    /// The tag is trimmed; empty tags and case-sensitive exact duplicates
    /// of existing tags (predefined or custom) are rejected, leaving the
    /// list unchanged.
    pub fn add_custom_page(&mut self, tag: &str) -> Result<(), WizardError> {
        let tag = tag.trim();
        if tag.is_empty() {
            return Err(WizardError::EmptyPage);
        }
        if self.values.content.pages.iter().any(|p| p == tag) {
            return Err(WizardError::DuplicatePage(tag.to_string()));
        }
        self.values.content.pages.push(tag.to_string());
        Ok(())
    }

    // -----------------------------------------------------------------
    // Asset uploads
    // -----------------------------------------------------------------

    /// Run a batch of asset uploads concurrently and join on all of them.
    ///
    /// All-or-nothing: the resulting URLs are appended to
    /// `look.assetUploads` only when every upload succeeds. If any
    /// upload fails, the batch's partial results are discarded, the form
    /// state is untouched, and a single batch error is returned.
    pub async fn upload_assets<I, F>(&mut self, uploads: I) -> Result<usize, WizardError>
    where
        I: IntoIterator<Item = F>,
        F: Future<Output = Result<String, String>>,
    {
        let results = join_all(uploads).await;
        let total = results.len();
        let failed = results.iter().filter(|r| r.is_err()).count();
        if failed > 0 {
            return Err(WizardError::UploadBatch { failed, total });
        }

        self.values
            .look
            .asset_uploads
            .extend(results.into_iter().map(|r| r.unwrap_or_default()));
        Ok(total)
    }
}
