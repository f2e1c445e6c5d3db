pub mod job;
pub mod launcher;
pub mod layer;
pub mod settings;

#[rustfmt::skip]
pub use self::{
    job::ScriptRequest,
    launcher::LauncherOptions,
    layer::{ConfigLayer, MergedConfig},
    settings::{ArgumentLists, Combination, SettingsGroup, SettingsSection},
};
