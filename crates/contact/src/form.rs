use std::collections::BTreeMap;

use folio_shared::contact::Status;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use strum::{AsRefStr, Display, EnumString, IntoStaticStr, VariantArray};
use validator::{Validate, ValidationErrors};

#[derive(
    EnumString,
    Display,
    AsRefStr,
    IntoStaticStr,
    VariantArray,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Subject,
    Message,
}

/// Raw values of the four user-editable fields.
#[derive(Validate, Deserialize, Serialize, Default, Clone, Debug, PartialEq, Eq)]
#[serde(default)]
pub struct SubmitFormInput {
    #[validate(length(min = 2, message = "Name must be at least 2 characters"))]
    pub name: String,
    #[validate(email(message = "Please enter a valid email address"))]
    pub email: String,
    #[validate(length(min = 5, message = "Subject must be at least 5 characters"))]
    pub subject: String,
    #[validate(length(min = 10, message = "Message must be at least 10 characters"))]
    pub message: String,
}

impl SubmitFormInput {
    pub fn get(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Subject => &self.subject,
            Field::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        let value = value.into();
        match field {
            Field::Name => self.name = value,
            Field::Email => self.email = value,
            Field::Subject => self.subject = value,
            Field::Message => self.message = value,
        }
    }

    pub fn is_empty(&self) -> bool {
        Field::VARIANTS.iter().all(|f| self.get(*f).is_empty())
    }

    /// Runs every rule and hands back a [`ValidForm`] only when all pass.
    pub fn validate_form(&self) -> Result<ValidForm, ValidationErrors> {
        self.validate()?;

        Ok(ValidForm(self.clone()))
    }
}

/// Input that passed validation. Only [`SubmitFormInput::validate_form`]
/// builds one, so a record can never be assembled from unchecked fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidForm(SubmitFormInput);

impl ValidForm {
    pub fn input(&self) -> &SubmitFormInput {
        &self.0
    }

    pub fn into_record(self) -> ContactRecord {
        ContactRecord {
            name: self.0.name,
            email: self.0.email,
            subject: self.0.subject,
            message: self.0.message,
            status: Status::New,
        }
    }
}

/// Document body written to the store. The timestamp is left to the store.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ContactRecord {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
    pub status: Status,
}

impl ContactRecord {
    pub fn to_document(&self) -> serde_json::Result<Map<String, Value>> {
        let Value::Object(document) = serde_json::to_value(self)? else {
            return Err(<serde_json::Error as serde::ser::Error>::custom(
                "contact record must serialize to an object",
            ));
        };

        Ok(document)
    }
}

/// Inline messages keyed by field, at most one per field.
#[derive(Default, Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FieldErrors(BTreeMap<Field, String>);

impl FieldErrors {
    pub fn get(&self, field: Field) -> Option<&str> {
        self.0.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn clear(&mut self) {
        self.0.clear();
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        self.0.iter().map(|(f, m)| (*f, m.as_str()))
    }
}

impl From<&ValidationErrors> for FieldErrors {
    fn from(errors: &ValidationErrors) -> Self {
        let mut fields = BTreeMap::new();

        for (name, errs) in errors.field_errors() {
            let Ok(field) = name.parse::<Field>() else {
                continue;
            };

            let Some(err) = errs.first() else {
                continue;
            };

            let message = err
                .message
                .as_ref()
                .map(|m| m.to_string())
                .unwrap_or_else(|| format!("{field} is invalid"));

            fields.insert(field, message);
        }

        Self(fields)
    }
}
