use axum::{
    extract::{Form, State},
    http::StatusCode,
    response::IntoResponse,
};
use folio_contact::{ContactForm, Field, FormView, SubmitFormInput, SubmitStatus};
use folio_shared::Error;

use crate::{routes::AppState, template::render};

pub struct FieldRow {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: &'static str,
    pub placeholder: &'static str,
    pub multiline: bool,
    pub value: String,
    pub error: Option<String>,
}

#[derive(askama::Template)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub rows: Vec<FieldRow>,
    pub success: bool,
    pub failed: bool,
}

impl From<FormView> for ContactTemplate {
    fn from(view: FormView) -> Self {
        let rows = [
            (Field::Name, "Name", "text", "Your full name"),
            (Field::Email, "Email", "email", "your.email@example.com"),
            (
                Field::Subject,
                "Subject",
                "text",
                "What would you like to discuss?",
            ),
            (
                Field::Message,
                "Message",
                "text",
                "Tell me about your project, questions, or how I can help...",
            ),
        ]
        .into_iter()
        .map(|(field, label, kind, placeholder)| FieldRow {
            name: field.into(),
            label,
            kind,
            placeholder,
            multiline: field == Field::Message,
            value: view.value(field).to_owned(),
            error: view.error(field).map(str::to_owned),
        })
        .collect();

        Self {
            rows,
            success: view.status == SubmitStatus::Success,
            failed: view.status == SubmitStatus::Error,
        }
    }
}

pub async fn page() -> impl IntoResponse {
    render(StatusCode::OK, ContactTemplate::from(FormView::default()))
}

pub async fn action(
    State(app_state): State<AppState>,
    Form(input): Form<SubmitFormInput>,
) -> impl IntoResponse {
    // One form per request; repeated posts are not deduplicated.
    let form = ContactForm::new(app_state.store.clone())
        .collection(app_state.config.contact.collection.to_owned());
    form.fill(input).await;

    let status = match form.submit().await {
        Ok(()) => StatusCode::OK,
        Err(Error::Validate(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        Err(_) => StatusCode::INTERNAL_SERVER_ERROR,
    };

    render(status, ContactTemplate::from(form.view().await))
}
