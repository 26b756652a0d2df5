//! HTTP client for the workspace settings endpoints
//!
//! Errors are returned as user-facing strings. Update endpoints answer with
//! the same envelope for every status, so bodies are parsed before the status
//! is looked at.

use atrium_common::routes::{settings_props_path, update_name_path, update_slug_path};
use atrium_common::{
    NameUpdated, SettingsProps, SlugUpdated, UpdateNameRequest, UpdateResponse, UpdateSlugRequest,
};
use atrium_ui::stores::SubmitResult;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Load the initial props for the general settings page.
pub async fn fetch_general_settings(slug: &str) -> Result<SettingsProps, String> {
    let resp = reqwest::get(settings_props_path(slug))
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    if !resp.status().is_success() {
        return Err(format!("Server error: {}", resp.status()));
    }

    resp.json().await.map_err(|e| format!("Parse error: {e}"))
}

pub async fn update_name(path_slug: &str, name: String) -> SubmitResult<NameUpdated> {
    put_json(&update_name_path(path_slug), &UpdateNameRequest { name }).await
}

pub async fn update_slug(path_slug: &str, slug: String) -> SubmitResult<SlugUpdated> {
    put_json(&update_slug_path(path_slug), &UpdateSlugRequest { slug }).await
}

async fn put_json<B: Serialize, T: DeserializeOwned>(url: &str, body: &B) -> SubmitResult<T> {
    let resp = reqwest::Client::new()
        .put(url)
        .json(body)
        .send()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    let status = resp.status().as_u16();
    let text = resp
        .text()
        .await
        .map_err(|e| format!("Network error: {e}"))?;

    parse_update_response(status, &text)
}

/// Parse an update envelope. Anything that is not an envelope becomes an error
/// string mentioning the status.
pub(crate) fn parse_update_response<T: DeserializeOwned>(status: u16, body: &str) -> SubmitResult<T> {
    match serde_json::from_str::<UpdateResponse<T>>(body) {
        Ok(resp) if resp.has_errors() || resp.data.is_some() => Ok(resp),
        Ok(resp) if (200..300).contains(&status) => Ok(resp),
        _ => Err(format!("Server error: {status}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_errors_from_unprocessable_response() {
        let resp: UpdateResponse<NameUpdated> =
            parse_update_response(422, r#"{"errors":{"name":{"msg":"Too long"}}}"#).unwrap();
        assert_eq!(resp.error_messages(), vec!["Too long".to_string()]);
    }

    #[test]
    fn parses_data_from_ok_response() {
        let resp: UpdateResponse<SlugUpdated> =
            parse_update_response(200, r#"{"data":{"slug":"acme-2"}}"#).unwrap();
        assert_eq!(resp.data.unwrap().slug, "acme-2");
    }

    #[test]
    fn empty_envelope_is_only_accepted_on_success() {
        assert!(parse_update_response::<NameUpdated>(200, "{}").is_ok());
        assert_eq!(
            parse_update_response::<NameUpdated>(500, "{}").unwrap_err(),
            "Server error: 500"
        );
    }

    #[test]
    fn non_json_body_is_an_error() {
        let err = parse_update_response::<NameUpdated>(502, "<html>Bad Gateway</html>").unwrap_err();
        assert_eq!(err, "Server error: 502");
    }
}
