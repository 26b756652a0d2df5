//! JSON envelopes exchanged between the settings page and the server

use crate::workspace::WorkspaceSummary;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single server-side validation failure.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldError {
    pub msg: String,
}

/// Validation failures keyed by field name.
pub type FieldErrors = BTreeMap<String, FieldError>;

/// Response of every update endpoint: either `errors` or `data` is set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(deserialize = "T: Deserialize<'de>"))]
pub struct UpdateResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub errors: Option<FieldErrors>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
}

impl<T> UpdateResponse<T> {
    pub fn ok(data: T) -> Self {
        Self {
            errors: None,
            data: Some(data),
        }
    }

    pub fn failed(errors: FieldErrors) -> Self {
        Self {
            errors: Some(errors),
            data: None,
        }
    }

    /// Shorthand for a response carrying exactly one field error.
    pub fn field_error(field: impl Into<String>, msg: impl Into<String>) -> Self {
        let mut errors = FieldErrors::new();
        errors.insert(field.into(), FieldError { msg: msg.into() });
        Self::failed(errors)
    }

    /// Error messages in field-name order. Empty when the response succeeded.
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .as_ref()
            .map(|errors| errors.values().map(|e| e.msg.clone()).collect())
            .unwrap_or_default()
    }

    pub fn has_errors(&self) -> bool {
        self.errors.as_ref().is_some_and(|e| !e.is_empty())
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateNameRequest {
    pub name: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateSlugRequest {
    pub slug: String,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameUpdated {
    pub name: String,
}

/// The slug the server actually stored, which may differ from the one sent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SlugUpdated {
    pub slug: String,
}

/// Initial props for the general settings page. `None` when there is no
/// session or the workspace is not visible to the user.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsProps {
    pub workspace: Option<WorkspaceSummary>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_error_envelope() {
        let json = r#"{"errors":{"name":{"msg":"Too long"}}}"#;
        let resp: UpdateResponse<NameUpdated> = serde_json::from_str(json).unwrap();
        assert!(resp.has_errors());
        assert!(resp.data.is_none());
        assert_eq!(resp.error_messages(), vec!["Too long".to_string()]);
    }

    #[test]
    fn parses_data_envelope() {
        let json = r#"{"data":{"slug":"new-slug"}}"#;
        let resp: UpdateResponse<SlugUpdated> = serde_json::from_str(json).unwrap();
        assert!(!resp.has_errors());
        assert_eq!(resp.data.unwrap().slug, "new-slug");
    }

    #[test]
    fn error_messages_follow_field_order() {
        let mut errors = FieldErrors::new();
        errors.insert("slug".into(), FieldError { msg: "b".into() });
        errors.insert("name".into(), FieldError { msg: "a".into() });
        let resp: UpdateResponse<()> = UpdateResponse::failed(errors);
        assert_eq!(resp.error_messages(), vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn success_serializes_without_errors_key() {
        let resp = UpdateResponse::ok(NameUpdated { name: "Acme".into() });
        let json = serde_json::to_string(&resp).unwrap();
        assert_eq!(json, r#"{"data":{"name":"Acme"}}"#);
    }

    #[test]
    fn null_workspace_props() {
        let props: SettingsProps = serde_json::from_str(r#"{"workspace":null}"#).unwrap();
        assert_eq!(props.workspace, None);
    }
}
