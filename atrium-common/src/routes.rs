//! Path builders shared by the router, the API client and the server

/// Location of the general settings page for a workspace.
pub fn general_settings_path(slug: &str) -> String {
    format!("/account/{slug}/settings/general")
}

pub fn settings_props_path(slug: &str) -> String {
    format!("/api/workspace/{slug}/settings")
}

pub fn update_name_path(slug: &str) -> String {
    format!("/api/workspace/{slug}/name")
}

pub fn update_slug_path(slug: &str) -> String {
    format!("/api/workspace/{slug}/slug")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_paths() {
        assert_eq!(general_settings_path("acme"), "/account/acme/settings/general");
        assert_eq!(settings_props_path("acme"), "/api/workspace/acme/settings");
        assert_eq!(update_name_path("acme"), "/api/workspace/acme/name");
        assert_eq!(update_slug_path("acme"), "/api/workspace/acme/slug");
    }
}
