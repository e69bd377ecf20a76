use fltk::{
    button::Button,
    group::Flex,
    prelude::*,
    text::{TextBuffer, TextEditor, WrapMode},
    window::Window,
};

use crate::app::applier::ApplyReport;
use crate::app::i18n::{tr, tr_fmt, Language};

/// Show the per-run summary: counts of layers styled, failed, and unmatched,
/// with the detail lines underneath.
pub fn show_apply_report(lang: Language, report: &ApplyReport) {
    let mut message = format!("{}\n\n", tr(lang, "apply_result_complete"));
    message.push_str(&tr_fmt(
        lang,
        "apply_result_success",
        &[("count", &report.styled.to_string())],
    ));
    message.push('\n');
    message.push_str(&tr_fmt(
        lang,
        "apply_result_failed",
        &[("count", &report.failed.to_string())],
    ));
    message.push('\n');
    message.push_str(&tr_fmt(
        lang,
        "apply_result_unmatched",
        &[("count", &report.unmatched.to_string())],
    ));

    if !report.details.is_empty() {
        message.push_str(&format!("\n\n{}\n", tr(lang, "apply_result_details")));
        message.push_str(&report.details.join("\n"));
    }

    let mut dialog = Window::default()
        .with_size(450, 350)
        .with_label(tr(lang, "apply_result_title"))
        .center_screen();
    dialog.make_modal(true);

    let mut flex = Flex::new(10, 10, 430, 330, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_spacing(10);

    let mut text = TextEditor::default();
    let mut buffer = TextBuffer::default();
    buffer.set_text(&message);
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
