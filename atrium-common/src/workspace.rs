use serde::{Deserialize, Serialize};

/// Read projection of a workspace, as the settings page sees it.
///
/// `workspace_code` is generated by the store and never edited here.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WorkspaceSummary {
    pub name: String,
    pub slug: String,
    pub workspace_code: String,
}

/// The editable fields of a workspace. Each one is saved by its own request.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SettingsField {
    Name,
    Slug,
}

impl SettingsField {
    /// Key used for this field in error envelopes.
    pub fn as_str(&self) -> &'static str {
        match self {
            SettingsField::Name => "name",
            SettingsField::Slug => "slug",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_uses_camel_case_on_the_wire() {
        let summary = WorkspaceSummary {
            name: "Acme".into(),
            slug: "acme-1".into(),
            workspace_code: "wc_123".into(),
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(
            json,
            serde_json::json!({ "name": "Acme", "slug": "acme-1", "workspaceCode": "wc_123" })
        );
    }
}
