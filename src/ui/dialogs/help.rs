use fltk::{
    button::Button,
    group::Flex,
    prelude::*,
    text::{TextBuffer, TextDisplay, WrapMode},
    window::Window,
};

use crate::app::i18n::{tr, Language};

/// Show the usage help dialog.
pub fn show_help_dialog(lang: Language) {
    let mut dialog = Window::default()
        .with_size(520, 420)
        .with_label(tr(lang, "help_title"))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 500, 400, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut text = TextDisplay::default();
    let mut buffer = TextBuffer::default();
    buffer.set_text(tr(lang, "help_content"));
    text.set_buffer(buffer);
    text.wrap_mode(WrapMode::AtBounds, 0);

    let mut ok_btn = Button::default().with_label(tr(lang, "ok_button"));
    flex.fixed(&ok_btn, 30);

    flex.end();
    dialog.end();

    let dialog_ok = dialog.clone();
    ok_btn.set_callback(move |_| {
        dialog_ok.clone().hide();
    });

    dialog.show();
    super::run_dialog(&dialog);
}
