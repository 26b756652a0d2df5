//! Edit workflow for the general settings page
//!
//! Name and slug are edited independently but share one submission gate:
//! while either save is in flight, every save action and the identifier copy
//! control are disabled. Each field moves through
//! `Idle -> Editing -> Submitting -> Idle`, and every response (success, field
//! errors or transport failure) resolves back to an editable state. A
//! response that arrives after the page moved to another workspace only
//! reopens the gate and reports; it never touches the new workspace.

use super::toast::Notification;
use atrium_common::routes::general_settings_path;
use atrium_common::{
    is_valid_name, is_valid_slug, NameUpdated, SettingsField, SlugUpdated, UpdateResponse,
    WorkspaceSummary,
};
use dioxus::prelude::*;
use tracing::warn;

pub const NAME_UPDATED_MSG: &str = "Workspace name successfully updated!";
pub const SLUG_UPDATED_MSG: &str = "Workspace slug successfully updated!";

/// Outcome of an update call. `Err` means no parseable response came back.
pub type SubmitResult<T> = Result<UpdateResponse<T>, String>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldPhase {
    Idle,
    /// Local value differs from the confirmed one
    Editing,
    Submitting,
}

/// One update call, scoped to one field.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct UpdateRequest {
    pub field: SettingsField,
    /// Slug the workspace is currently addressed by
    pub path_slug: String,
    /// Stable identity of the workspace the request was built for
    pub workspace_code: String,
    pub value: String,
}

/// What the controller has to do once a submit resolves.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SubmitResolution {
    pub notifications: Vec<Notification>,
    /// Settings location to replace the current one with
    pub redirect: Option<String>,
}

impl SubmitResolution {
    fn errors(messages: Vec<String>) -> Self {
        Self {
            notifications: messages.into_iter().map(Notification::error).collect(),
            redirect: None,
        }
    }
}

#[derive(Clone, Debug, Default, PartialEq, Store)]
pub struct GeneralSettingsState {
    /// Last values confirmed by the server
    pub workspace: WorkspaceSummary,
    pub name: String,
    pub slug: String,
    /// Field whose save is in flight. `Some` closes the gate for everything.
    pub in_flight: Option<SettingsField>,
}

impl GeneralSettingsState {
    pub fn seeded(workspace: WorkspaceSummary) -> Self {
        Self {
            name: workspace.name.clone(),
            slug: workspace.slug.clone(),
            workspace,
            in_flight: None,
        }
    }

    /// Adopt a new confirmed workspace, discarding local edits. Does nothing
    /// when the workspace is unchanged so re-renders never clobber typing.
    pub fn reseed(&mut self, workspace: WorkspaceSummary) -> bool {
        if self.workspace == workspace {
            return false;
        }
        *self = Self {
            in_flight: self.in_flight,
            ..Self::seeded(workspace)
        };
        true
    }

    pub fn set_name(&mut self, value: String) {
        self.name = value;
    }

    pub fn set_slug(&mut self, value: String) {
        self.slug = value;
    }

    pub fn name_valid(&self) -> bool {
        is_valid_name(&self.name)
    }

    pub fn slug_valid(&self) -> bool {
        is_valid_slug(&self.slug)
    }

    fn buffer(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::Name => &self.name,
            SettingsField::Slug => &self.slug,
        }
    }

    fn confirmed(&self, field: SettingsField) -> &str {
        match field {
            SettingsField::Name => &self.workspace.name,
            SettingsField::Slug => &self.workspace.slug,
        }
    }

    pub fn phase(&self, field: SettingsField) -> FieldPhase {
        if self.in_flight == Some(field) {
            FieldPhase::Submitting
        } else if self.buffer(field) != self.confirmed(field) {
            FieldPhase::Editing
        } else {
            FieldPhase::Idle
        }
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.is_some()
    }

    /// The identifier copy control shares the submission gate.
    pub fn can_copy_code(&self) -> bool {
        !self.is_submitting()
    }

    pub fn can_save(&self, field: SettingsField) -> bool {
        let valid = match field {
            SettingsField::Name => self.name_valid(),
            SettingsField::Slug => self.slug_valid(),
        };
        valid && !self.is_submitting()
    }

    /// Close the gate and build the request for `field`. `None` means the
    /// save is not allowed right now and no call must be made.
    pub fn begin_submit(&mut self, field: SettingsField) -> Option<UpdateRequest> {
        if !self.can_save(field) {
            return None;
        }
        self.in_flight = Some(field);
        Some(UpdateRequest {
            field,
            path_slug: self.workspace.slug.clone(),
            workspace_code: self.workspace.workspace_code.clone(),
            value: self.buffer(field).to_string(),
        })
    }

    /// Reopen the gate and split off every outcome that must not touch the
    /// confirmed values: transport failures, field errors, and responses for
    /// a workspace the page no longer shows.
    fn settle<T>(
        &mut self,
        request: &UpdateRequest,
        result: SubmitResult<T>,
        success_msg: &str,
    ) -> Result<Option<T>, SubmitResolution> {
        self.in_flight = None;
        let response = match result {
            Ok(response) => response,
            Err(e) => {
                warn!("{:?} update failed: {e}", request.field);
                return Err(SubmitResolution::errors(vec![e]));
            }
        };
        if response.has_errors() {
            return Err(SubmitResolution::errors(response.error_messages()));
        }
        if request.workspace_code != self.workspace.workspace_code {
            warn!(
                "{:?} update for {} resolved after the page moved on",
                request.field, request.workspace_code
            );
            return Err(SubmitResolution {
                notifications: vec![Notification::success(success_msg)],
                redirect: None,
            });
        }
        Ok(response.data)
    }

    pub fn finish_name(
        &mut self,
        request: &UpdateRequest,
        result: SubmitResult<NameUpdated>,
    ) -> SubmitResolution {
        let data = match self.settle(request, result, NAME_UPDATED_MSG) {
            Ok(data) => data,
            Err(resolution) => return resolution,
        };

        let name = match data {
            Some(NameUpdated { name }) => name,
            None => {
                warn!("Name update returned no data, assuming {:?} was stored", request.value);
                request.value.clone()
            }
        };
        self.workspace.name = name.clone();
        self.name = name;

        SubmitResolution {
            notifications: vec![Notification::success(NAME_UPDATED_MSG)],
            redirect: None,
        }
    }

    /// Resolve a slug save. On success the page must move to the location
    /// built from the slug the server stored, which may differ from the one
    /// that was typed.
    pub fn finish_slug(
        &mut self,
        request: &UpdateRequest,
        result: SubmitResult<SlugUpdated>,
    ) -> SubmitResolution {
        let data = match self.settle(request, result, SLUG_UPDATED_MSG) {
            Ok(data) => data,
            Err(resolution) => return resolution,
        };

        let slug = match data {
            Some(SlugUpdated { slug }) => slug,
            None => {
                warn!("Slug update returned no data, assuming {:?} was stored", request.value);
                request.value.clone()
            }
        };
        self.workspace.slug = slug.clone();
        self.slug = slug;

        SubmitResolution {
            notifications: vec![Notification::success(SLUG_UPDATED_MSG)],
            redirect: Some(general_settings_path(&self.slug)),
        }
    }
}
