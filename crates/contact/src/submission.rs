use std::sync::Arc;

use serde::Serialize;
use strum::{AsRefStr, Display};
use tokio::sync::Mutex;
use tracing::Instrument;

use crate::{DEFAULT_COLLECTION, DocumentStore, Field, FieldErrors, SubmitFormInput};

/// Outcome of the latest attempt on a form.
#[derive(Display, AsRefStr, Default, Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success,
    Error,
}

impl SubmitStatus {
    pub fn is_submitting(&self) -> bool {
        matches!(self, Self::Submitting)
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, Self::Success | Self::Error)
    }
}

/// Snapshot of a form, enough to render it.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FormView {
    pub input: SubmitFormInput,
    pub errors: FieldErrors,
    pub status: SubmitStatus,
}

impl FormView {
    pub fn value(&self, field: Field) -> &str {
        self.input.get(field)
    }

    pub fn error(&self, field: Field) -> Option<&str> {
        self.errors.get(field)
    }

    pub fn is_busy(&self) -> bool {
        self.status.is_submitting()
    }
}

#[derive(Default)]
struct FormState {
    input: SubmitFormInput,
    errors: FieldErrors,
    status: SubmitStatus,
}

impl FormState {
    // An edit after a finished attempt starts a new one.
    fn touch(&mut self) {
        if self.status.is_finished() {
            self.status = SubmitStatus::Idle;
        }
    }
}

/// One contact form instance bound to a document store.
///
/// The `Submitting` status doubles as the busy flag: while a write is
/// pending, further [`ContactForm::submit`] calls return
/// [`folio_shared::Error::Busy`] without touching the store.
///
/// The write runs on its own task, so the status settles even when the
/// caller stops awaiting [`ContactForm::submit`].
pub struct ContactForm<S> {
    store: Arc<S>,
    collection: String,
    state: Arc<Mutex<FormState>>,
}

impl<S: DocumentStore + 'static> ContactForm<S> {
    pub fn new(store: S) -> Self {
        Self {
            store: Arc::new(store),
            collection: DEFAULT_COLLECTION.to_owned(),
            state: Arc::default(),
        }
    }

    pub fn collection(mut self, collection: impl Into<String>) -> Self {
        self.collection = collection.into();
        self
    }

    pub async fn set(&self, field: Field, value: impl Into<String>) {
        let mut state = self.state.lock().await;
        state.input.set(field, value);
        state.touch();
    }

    pub async fn fill(&self, input: SubmitFormInput) {
        let mut state = self.state.lock().await;
        state.input = input;
        state.touch();
    }

    pub async fn status(&self) -> SubmitStatus {
        self.state.lock().await.status
    }

    pub async fn fields(&self) -> SubmitFormInput {
        self.state.lock().await.input.clone()
    }

    pub async fn errors(&self) -> FieldErrors {
        self.state.lock().await.errors.clone()
    }

    pub async fn view(&self) -> FormView {
        let state = self.state.lock().await;

        FormView {
            input: state.input.clone(),
            errors: state.errors.clone(),
            status: state.status,
        }
    }

    #[tracing::instrument(skip(self), fields(collection = %self.collection))]
    pub async fn submit(&self) -> folio_shared::Result<()> {
        let data = {
            let mut state = self.state.lock().await;

            if state.status.is_submitting() {
                tracing::debug!("submission already in flight");
                return Err(folio_shared::Error::Busy);
            }

            let form = match state.input.validate_form() {
                Ok(form) => form,
                Err(errors) => {
                    state.errors = FieldErrors::from(&errors);
                    tracing::debug!(fields = state.errors.len(), "contact form rejected");
                    return Err(errors.into());
                }
            };

            let data = form.into_record().to_document()?;
            state.errors.clear();
            state.status = SubmitStatus::Submitting;

            data
        };

        let store = self.store.clone();
        let state = self.state.clone();
        let collection = self.collection.to_owned();

        let write = tokio::spawn(
            async move {
                let result = store.add_document(&collection, data).await;
                let mut state = state.lock().await;

                match result {
                    Ok(id) => {
                        tracing::info!(id, "contact submission stored");
                        state.input = SubmitFormInput::default();
                        state.status = SubmitStatus::Success;

                        Ok(())
                    }
                    Err(err) => {
                        tracing::error!("failed to store contact submission: {err:#}");
                        state.status = SubmitStatus::Error;

                        Err(err)
                    }
                }
            }
            .in_current_span(),
        );

        match write.await {
            Ok(result) => Ok(result?),
            Err(err) => {
                tracing::error!("contact submission task failed: {err}");
                self.state.lock().await.status = SubmitStatus::Error;

                Err(anyhow::Error::from(err).into())
            }
        }
    }
}
