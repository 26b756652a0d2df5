mod general_settings;
mod home;
mod workspace_settings;

pub use general_settings::GeneralSettings;
pub use home::Home;
pub use workspace_settings::WorkspaceSettings;
