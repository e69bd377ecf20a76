use fltk::{
    button::Button,
    enums::{Color, Font},
    frame::Frame,
    group::Flex,
    prelude::*,
    window::Window,
};

use crate::app::i18n::{tr, tr_fmt, Language};

/// Show About dialog
pub fn show_about_dialog(lang: Language) {
    let version = env!("CARGO_PKG_VERSION");
    let mut dialog = Window::default()
        .with_size(420, 300)
        .with_label(tr(lang, "about_title"))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 400, 280, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut title = Frame::default();
    title.set_label("AutoStyle");
    title.set_label_size(24);
    title.set_label_font(Font::HelveticaBold);
    flex.fixed(&title, 40);

    let mut version_frame = Frame::default();
    version_frame.set_label(&tr_fmt(lang, "version_label", &[("version", version)]));
    version_frame.set_label_size(14);
    flex.fixed(&version_frame, 25);

    let mut desc_frame = Frame::default();
    desc_frame.set_label(tr(lang, "about_description"));
    desc_frame.set_label_size(12);
    desc_frame.set_label_color(Color::from_rgb(100, 100, 100));
    desc_frame.set_align(fltk::enums::Align::Center | fltk::enums::Align::Inside | fltk::enums::Align::Wrap);
    flex.fixed(&desc_frame, 40);

    let info_text = "Licensed under the MIT License\n\nGitHub: github.com/autostyle/autostyle";
    let mut info_frame = Frame::default();
    info_frame.set_label(info_text);
    info_frame.set_label_size(12);
    info_frame.set_align(fltk::enums::Align::Center | fltk::enums::Align::Inside);
    flex.fixed(&info_frame, 80);

    let _spacer = Frame::default();

    let mut close_btn = Button::default().with_label(tr(lang, "close_button"));
    flex.fixed(&close_btn, 35);

    flex.end();
    dialog.end();

    let dialog_close = dialog.clone();
    close_btn.set_callback(move |_| {
        dialog_close.clone().hide();
    });

    dialog.show();
    super::run_dialog(&dialog);
}
