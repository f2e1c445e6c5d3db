use typed_builder::TypedBuilder;

use super::{ArgumentLists, LauncherOptions, SettingsGroup};

/// Everything needed to render one submission script.
#[derive(Debug, Clone, TypedBuilder)]
pub struct ScriptRequest {
    #[builder(setter(into))]
    pub module: String,
    #[builder(default)]
    pub arguments: ArgumentLists,
    #[builder(default)]
    pub directives: SettingsGroup,
    pub launcher: LauncherOptions,
}
