//! GenerateDocument - command handler driving the generation pipeline.
//!
//! Walks one submission through validation, template selection,
//! placeholder binding and packaging, recording successful generations
//! in the history store. A single flow instance admits one generation
//! at a time; concurrent triggers are rejected, never queued.

use std::sync::{Arc, Mutex as StdMutex};

use thiserror::Error;

use crate::domain::document::{
    DocumentType, DownloadPackage, DownloadPackager, FieldErrors, FieldMap, FormValidator,
    LengthVariant, PackageError, TemplateId,
};
use crate::domain::foundation::{GenerationStatus, RecordId, StateMachine, ValidationError};
use crate::domain::history::GeneratedDocumentRecord;
use crate::ports::{DocumentRenderer, RenderError, TemplateStore, TemplateStoreError};

use super::history_store::HistoryStore;

/// Command to generate a power of attorney document.
#[derive(Debug, Clone)]
pub struct GenerateDocumentCommand {
    /// Which kind of power of attorney to generate.
    pub document_type: DocumentType,
    /// Wording length of the generated document.
    pub length_variant: LengthVariant,
    /// Raw submitted fields, validated by the flow.
    pub fields: FieldMap,
}

impl GenerateDocumentCommand {
    pub fn new(
        document_type: DocumentType,
        length_variant: LengthVariant,
        fields: FieldMap,
    ) -> Self {
        Self {
            document_type,
            length_variant,
            fields,
        }
    }
}

/// Errors that can occur while generating a document.
#[derive(Debug, Error)]
pub enum GenerateDocumentError {
    /// Another generation is already in flight on this flow instance.
    #[error("Another document generation is already in progress")]
    Busy,

    /// One or more submitted fields failed validation.
    ///
    /// Carries the full per-field error map; every failing field is
    /// reported, not just the first.
    #[error("Validation failed: {0}")]
    Validation(FieldErrors),

    /// The template asset could not be fetched.
    #[error(transparent)]
    TemplateStore(#[from] TemplateStoreError),

    /// Placeholder binding failed.
    #[error(transparent)]
    Render(#[from] RenderError),

    /// The rendered bytes could not be packaged for download.
    #[error(transparent)]
    Package(#[from] PackageError),

    /// Internal phase bookkeeping rejected a transition.
    #[error("Generation state error: {0}")]
    InvalidTransition(#[from] ValidationError),
}

impl From<FieldErrors> for GenerateDocumentError {
    fn from(errors: FieldErrors) -> Self {
        GenerateDocumentError::Validation(errors)
    }
}

/// Result of a successful generation.
#[derive(Debug)]
pub struct GenerateDocumentResult {
    /// The packaged document, ready for download.
    pub package: DownloadPackage,
    /// Id of the history record captured for this generation.
    pub record_id: RecordId,
}

/// Handler for document generation.
///
/// Holds the shared phase cell that makes the flow single-admission;
/// wrap it in an `Arc` and reuse one instance per serving surface.
pub struct GenerateDocumentHandler {
    template_store: Arc<dyn TemplateStore>,
    renderer: Arc<dyn DocumentRenderer>,
    history: Arc<HistoryStore>,
    status: Arc<StdMutex<GenerationStatus>>,
}

impl GenerateDocumentHandler {
    pub fn new(
        template_store: Arc<dyn TemplateStore>,
        renderer: Arc<dyn DocumentRenderer>,
        history: Arc<HistoryStore>,
    ) -> Self {
        Self {
            template_store,
            renderer,
            history,
            status: Arc::new(StdMutex::new(GenerationStatus::default())),
        }
    }

    /// Current phase of the flow, for observability.
    ///
    /// # Panics
    ///
    /// Panics if the status lock is poisoned.
    pub fn status(&self) -> GenerationStatus {
        *self
            .status
            .lock()
            .expect("GenerateDocumentHandler: status lock poisoned")
    }

    /// Handles a generation command end to end.
    ///
    /// On success the rendered package is returned together with the id
    /// of the history record captured for it. On any failure no history
    /// record is written and no partial output escapes.
    pub async fn handle(
        &self,
        cmd: GenerateDocumentCommand,
    ) -> Result<GenerateDocumentResult, GenerateDocumentError> {
        let mut guard = InFlightGuard::claim(Arc::clone(&self.status))?;

        match self.execute(&mut guard, cmd).await {
            Ok(result) => {
                guard.advance(GenerationStatus::Completed)?;
                tracing::info!(record_id = %result.record_id, "Document generated");
                Ok(result)
            }
            Err(e) => {
                guard.fail();
                tracing::warn!(error = %e, "Document generation failed");
                Err(e)
            }
        }
    }

    /// Re-renders a stored history snapshot.
    ///
    /// Shares the in-flight guard with `handle` but writes nothing to
    /// the history log; re-downloading is not a new generation.
    pub async fn regenerate(
        &self,
        record: &GeneratedDocumentRecord,
    ) -> Result<DownloadPackage, GenerateDocumentError> {
        let mut guard = InFlightGuard::claim(Arc::clone(&self.status))?;

        match self.render_snapshot(&mut guard, record).await {
            Ok(package) => {
                guard.advance(GenerationStatus::Completed)?;
                tracing::info!(record_id = %record.id(), "History snapshot re-rendered");
                Ok(package)
            }
            Err(e) => {
                guard.fail();
                tracing::warn!(record_id = %record.id(), error = %e, "Snapshot re-render failed");
                Err(e)
            }
        }
    }

    async fn execute(
        &self,
        guard: &mut InFlightGuard,
        cmd: GenerateDocumentCommand,
    ) -> Result<GenerateDocumentResult, GenerateDocumentError> {
        // 1. Validate the submitted fields against the document schema.
        let validated = FormValidator::validate(cmd.document_type, &cmd.fields)?;

        // 2. Fetch the template asset for the requested combination.
        guard.advance(GenerationStatus::Rendering)?;
        let template_id = TemplateId::select(cmd.document_type, cmd.length_variant);
        let template = self.template_store.fetch(template_id).await?;

        // 3. Bind the validated fields into the template.
        let rendered = self.renderer.render(&template, &validated)?;

        // 4. Package the bytes under the user-facing filename.
        guard.advance(GenerationStatus::Packaging)?;
        let package = DownloadPackager::package(rendered, cmd.document_type, &validated)?;

        // 5. Record the generation. The document is already in hand, so
        //    a persistence failure is logged rather than failing the
        //    request.
        let record =
            GeneratedDocumentRecord::new(cmd.document_type, cmd.length_variant, validated);
        let record_id = *record.id();
        if let Err(e) = self.history.append(record).await {
            tracing::warn!(
                record_id = %record_id,
                error = %e,
                "Document delivered but its history record was not persisted"
            );
        }

        Ok(GenerateDocumentResult { package, record_id })
    }

    async fn render_snapshot(
        &self,
        guard: &mut InFlightGuard,
        record: &GeneratedDocumentRecord,
    ) -> Result<DownloadPackage, GenerateDocumentError> {
        // Stored snapshots passed validation when first recorded; the
        // validating phase is a pass-through here.
        guard.advance(GenerationStatus::Rendering)?;
        let template_id = TemplateId::select(record.document_type(), record.length_variant());
        let template = self.template_store.fetch(template_id).await?;
        let rendered = self.renderer.render(&template, record.fields())?;

        guard.advance(GenerationStatus::Packaging)?;
        let package = DownloadPackager::package(rendered, record.document_type(), record.fields())?;
        Ok(package)
    }
}

/// Claim on the flow's phase cell for one generation.
///
/// Created only from `Idle`; dropping it returns the cell to `Idle` on
/// every exit path, including panics and cancellation.
///
/// # Panics
///
/// `claim`, `advance` and `fail` panic if the status lock is poisoned.
struct InFlightGuard {
    status: Arc<StdMutex<GenerationStatus>>,
}

impl InFlightGuard {
    /// Claims an idle flow, moving it to `Validating`.
    fn claim(status: Arc<StdMutex<GenerationStatus>>) -> Result<Self, GenerateDocumentError> {
        {
            let mut cell = status
                .lock()
                .expect("GenerateDocumentHandler: status lock poisoned");
            if !cell.is_idle() {
                return Err(GenerateDocumentError::Busy);
            }
            *cell = cell.transition_to(GenerationStatus::Validating)?;
        }
        Ok(Self { status })
    }

    /// Advances the flow to the next phase.
    ///
    /// The lock is taken only for the transition itself, never across
    /// an await point.
    fn advance(&mut self, target: GenerationStatus) -> Result<(), GenerateDocumentError> {
        let mut cell = self
            .status
            .lock()
            .expect("GenerateDocumentHandler: status lock poisoned");
        *cell = cell.transition_to(target)?;
        Ok(())
    }

    /// Marks the flow failed; the drop reset then returns it to idle.
    fn fail(&mut self) {
        let mut cell = self
            .status
            .lock()
            .expect("GenerateDocumentHandler: status lock poisoned");
        if let Ok(next) = cell.transition_to(GenerationStatus::Failed) {
            *cell = next;
        }
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        // The reset must happen even while unwinding from a panic.
        let mut cell = match self.status.lock() {
            Ok(cell) => cell,
            Err(poisoned) => poisoned.into_inner(),
        };
        *cell = GenerationStatus::Idle;
    }
}
