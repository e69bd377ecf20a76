use super::updater::ReleaseInfo;

/// All messages that can be sent through the FLTK channel.
/// Each menu or button callback sends one of these; the dispatch loop in
/// main handles them.
#[derive(Debug, Clone)]
pub enum Message {
    // Project
    ChooseProjectFolder,

    // Config list
    ConfigSelectionChanged,
    AddConfig,
    EditConfig,
    DeleteConfig,
    ImportConfig,
    ExportConfig,

    // Styling
    ApplyStyles,

    // Settings & Help
    OpenSettings,
    ShowHelp,
    ShowAbout,
    CheckForUpdates,

    // Background updates
    BackgroundUpdateResult(Option<ReleaseInfo>),
    ShowBannerUpdate,

    Quit,
}
