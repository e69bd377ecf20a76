use std::cell::RefCell;
use std::rc::Rc;

use fltk::{
    button::Button,
    dialog,
    enums::Color,
    frame::Frame,
    group::Flex,
    input::Input,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::config::{parse_rule_lines, render_rule_lines, StyleConfig};
use crate::app::i18n::{tr, tr_fmt, Language};
use crate::app::store::ConfigStore;
use crate::ui::file_dialogs::native_open_dialog;

/// Show the add/edit dialog. The config is validated and saved from inside
/// the dialog so parse errors keep it open for correction; the saved name is
/// returned on success, `None` when the user cancelled.
pub fn show_edit_config_dialog(
    lang: Language,
    store: &ConfigStore,
    existing: Option<StyleConfig>,
) -> Option<String> {
    let title = if existing.is_some() {
        tr(lang, "edit_dialog_title_edit")
    } else {
        tr(lang, "edit_dialog_title_add")
    };
    let old_name = existing.as_ref().map(|c| c.name.clone());

    let mut dialog = Window::default()
        .with_size(560, 420)
        .with_label(title)
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 540, 400, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(8);

    // Name row
    let mut name_row = Flex::default();
    name_row.set_type(fltk::group::FlexType::Row);
    name_row.set_spacing(8);
    let name_label = Frame::default().with_label(tr(lang, "config_name_label"));
    name_row.fixed(&name_label, 70);
    let mut name_input = Input::default();
    if let Some(config) = &existing {
        name_input.set_value(&config.name);
    }
    name_row.end();
    flex.fixed(&name_row, 28);

    // Rules editor
    let rules_label = Frame::default()
        .with_label(tr(lang, "rules_label"))
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    flex.fixed(&rules_label, 22);

    let mut hint = Frame::default()
        .with_label(tr(lang, "rules_hint"))
        .with_align(fltk::enums::Align::Left | fltk::enums::Align::Inside);
    hint.set_label_size(11);
    hint.set_label_color(Color::from_rgb(100, 100, 100));
    flex.fixed(&hint, 20);

    let mut rules_editor = TextEditor::default();
    let mut rules_buffer = TextBuffer::default();
    if let Some(config) = &existing {
        rules_buffer.set_text(&render_rule_lines(&config.rules));
    }
    rules_editor.set_buffer(rules_buffer.clone());
    rules_editor.wrap_mode(WrapMode::None, 0);

    // Buttons row
    let mut button_row = Flex::default();
    button_row.set_type(fltk::group::FlexType::Row);
    button_row.set_spacing(8);

    let mut browse_btn = Button::default().with_label(tr(lang, "browse_style_button"));
    button_row.fixed(&browse_btn, 150);
    let _spacer = Frame::default();
    let mut save_btn = Button::default().with_label(tr(lang, "save_button"));
    button_row.fixed(&save_btn, 90);
    let mut cancel_btn = Button::default().with_label(tr(lang, "cancel_button"));
    button_row.fixed(&cancel_btn, 90);

    button_row.end();
    flex.fixed(&button_row, 30);

    flex.end();
    dialog.end();
    dialog.show();

    // Browse appends a line with the chosen style file; the user fills in
    // the pattern in front of the separator.
    let mut buffer_browse = rules_buffer.clone();
    browse_btn.set_callback(move |_| {
        if let Some(path) = native_open_dialog("*.qml") {
            let mut text = buffer_browse.text();
            if !text.is_empty() && !text.ends_with('\n') {
                text.push('\n');
            }
            text.push_str(&format!(" | {}", path));
            buffer_browse.set_text(&text);
        }
    });

    let result = Rc::new(RefCell::new(None));

    let result_save = result.clone();
    let dialog_save = dialog.clone();
    let store_save = store.clone();
    let name_input_save = name_input.clone();
    let buffer_save = rules_buffer.clone();
    save_btn.set_callback(move |_| {
        let name = name_input_save.value().trim().to_string();
        if name.is_empty() {
            dialog::alert_default(tr(lang, "config_name_empty"));
            return;
        }

        let rules = match parse_rule_lines(&buffer_save.text()) {
            Ok(rules) => rules,
            Err(e) => {
                dialog::alert_default(&tr_fmt(
                    lang,
                    "save_config_failed",
                    &[("error", &e.to_string())],
                ));
                return;
            }
        };

        let config = StyleConfig::new(name, rules);
        match store_save.save_renamed(&config, old_name.as_deref()) {
            Ok(()) => {
                *result_save.borrow_mut() = Some(config.name);
                dialog_save.clone().hide();
            }
            Err(e) => {
                dialog::alert_default(&tr_fmt(
                    lang,
                    "save_config_failed",
                    &[("error", &e.to_string())],
                ));
            }
        }
    });

    let dialog_cancel = dialog.clone();
    cancel_btn.set_callback(move |_| {
        dialog_cancel.clone().hide();
    });

    super::run_dialog(&dialog);

    let name = result.borrow().clone();
    name
}
