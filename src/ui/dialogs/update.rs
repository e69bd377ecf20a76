use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::Button,
    dialog,
    enums::Font,
    frame::Frame,
    group::Flex,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::i18n::{tr, tr_fmt, Language};
use crate::app::settings::AppSettings;
use crate::app::updater::ReleaseInfo;

/// Check for updates and show UI dialog (manual check)
pub fn check_for_updates_ui(lang: Language, settings: &Rc<RefCell<AppSettings>>) {
    use crate::app::updater::{check_for_updates, current_timestamp, UpdateCheckResult};

    let current_version = env!("CARGO_PKG_VERSION");
    let skipped = settings.borrow().skipped_versions.clone();

    let result = check_for_updates(current_version, &skipped);

    match result {
        UpdateCheckResult::UpdateAvailable(release) => {
            show_update_available_dialog(lang, release, settings);
        }
        UpdateCheckResult::NoUpdate => {
            dialog::message_default(&tr_fmt(
                lang,
                "up_to_date_msg",
                &[("version", current_version)],
            ));
        }
        UpdateCheckResult::Error(err) => {
            dialog::alert_default(&tr_fmt(lang, "update_check_failed", &[("error", &err)]));
        }
    }

    let mut settings_mut = settings.borrow_mut();
    settings_mut.last_update_check = current_timestamp();
    let _ = settings_mut.save();
}

/// Show update available dialog with options
pub fn show_update_available_dialog(
    lang: Language,
    release: ReleaseInfo,
    settings: &Rc<RefCell<AppSettings>>,
) {
    let current_version = env!("CARGO_PKG_VERSION");

    let mut dialog = Window::default()
        .with_size(480, 400)
        .with_label(tr(lang, "update_available_title"))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 460, 380, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default().with_label(tr(lang, "update_available_title"));
    title.set_label_size(18);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 30);

    let version_text = tr_fmt(
        lang,
        "update_version_info",
        &[("current", current_version), ("latest", &release.version())],
    );
    let mut version_frame = Frame::default().with_label(&version_text);
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 50);

    let mut notes_label = Frame::default().with_label(tr(lang, "whats_new_label"));
    notes_label.set_label_size(14);
    notes_label.set_label_font(Font::HelveticaBold);
    flex.fixed(&notes_label, 25);

    let mut notes_editor = TextEditor::default();
    let mut notes_buffer = TextBuffer::default();
    notes_buffer.set_text(&release.body);
    notes_editor.set_buffer(notes_buffer);
    notes_editor.wrap_mode(WrapMode::AtBounds, 0);

    let mut button_row = Flex::default();
    button_row.set_type(fltk::group::FlexType::Row);
    button_row.set_spacing(10);

    let mut view_btn = Button::default().with_label(tr(lang, "view_release_button"));
    let mut skip_btn = Button::default().with_label(tr(lang, "skip_version_button"));
    let mut later_btn = Button::default().with_label(tr(lang, "remind_later_button"));

    button_row.end();
    flex.fixed(&button_row, 35);

    flex.end();
    dialog.end();

    // View release button opens the release page; the updater never
    // self-installs.
    let release_url = release.html_url.clone();
    view_btn.set_callback(move |_| {
        if let Err(e) = open::that(&release_url) {
            dialog::alert_default(&format!("Failed to open browser: {}", e));
        }
    });

    let settings_skip = settings.clone();
    let version_to_skip = release.version();
    let mut dialog_skip = dialog.clone();
    skip_btn.set_callback(move |_| {
        let mut settings_mut = settings_skip.borrow_mut();
        if !settings_mut.skipped_versions.contains(&version_to_skip) {
            settings_mut.skipped_versions.push(version_to_skip.clone());
            let _ = settings_mut.save();
        }
        dialog_skip.hide();
    });

    let mut dialog_later = dialog.clone();
    later_btn.set_callback(move |_| {
        dialog_later.hide();
    });

    dialog.show();
    super::run_dialog(&dialog);
}
