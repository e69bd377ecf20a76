use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::{Button, CheckButton, RadioRoundButton},
    frame::Frame,
    group::Group,
    prelude::*,
    window::Window,
};

use crate::app::i18n::{tr, Language};
use crate::app::settings::{AppSettings, LanguageChoice};

/// Show settings dialog and return updated settings if user clicked Save.
/// A language change takes effect on the next start.
pub fn show_settings_dialog(lang: Language, current_settings: &AppSettings) -> Option<AppSettings> {
    let mut dialog = Window::default()
        .with_size(320, 280)
        .with_label(tr(lang, "settings_title"))
        .center_screen();
    dialog.make_modal(true);

    // Language section
    Frame::default()
        .with_pos(15, 15)
        .with_size(290, 25)
        .with_label(tr(lang, "language_label"))
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let language_group = Group::default().with_pos(30, 45).with_size(260, 75);
    let mut lang_system = RadioRoundButton::default()
        .with_pos(30, 45)
        .with_size(260, 25)
        .with_label(tr(lang, "language_system"));
    let mut lang_english = RadioRoundButton::default()
        .with_pos(30, 70)
        .with_size(260, 25)
        .with_label(tr(lang, "language_english"));
    let mut lang_chinese = RadioRoundButton::default()
        .with_pos(30, 95)
        .with_size(260, 25)
        .with_label(tr(lang, "language_chinese"));
    language_group.end();

    match current_settings.language {
        LanguageChoice::System => lang_system.set_value(true),
        LanguageChoice::English => lang_english.set_value(true),
        LanguageChoice::Chinese => lang_chinese.set_value(true),
    }

    // Updates section
    Frame::default()
        .with_pos(15, 135)
        .with_size(290, 25)
        .with_label(tr(lang, "updates_label"))
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    let mut check_auto_update = CheckButton::default()
        .with_pos(30, 165)
        .with_size(260, 25)
        .with_label(tr(lang, "auto_check_updates_label"));
    check_auto_update.set_value(current_settings.auto_check_updates);

    // Buttons at bottom
    let mut save_btn = Button::default()
        .with_pos(120, 230)
        .with_size(90, 30)
        .with_label(tr(lang, "save_button"));
    let mut cancel_btn = Button::default()
        .with_pos(220, 230)
        .with_size(90, 30)
        .with_label(tr(lang, "cancel_button"));

    dialog.end();
    dialog.show();

    let result = Rc::new(RefCell::new(None));
    let result_save = result.clone();

    let dialog_save = dialog.clone();
    let current = current_settings.clone();
    save_btn.set_callback(move |_| {
        let new_settings = AppSettings {
            language: if lang_english.value() {
                LanguageChoice::English
            } else if lang_chinese.value() {
                LanguageChoice::Chinese
            } else {
                LanguageChoice::System
            },
            auto_check_updates: check_auto_update.value(),
            last_update_check: current.last_update_check,
            skipped_versions: current.skipped_versions.clone(),
            last_config: current.last_config.clone(),
            last_project_dir: current.last_project_dir.clone(),
        };

        *result_save.borrow_mut() = Some(new_settings);
        dialog_save.clone().hide();
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    super::run_dialog(&dialog);

    let settings = result.borrow().clone();
    settings
}
