use fltk::{
    app::Sender,
    button::Button,
    enums::Color,
    frame::Frame,
    group::Flex,
    menu::{Choice, MenuBar},
    output::Output,
    prelude::*,
    window::Window,
};

use crate::app::i18n::{tr, Language};
use crate::app::messages::Message;

pub struct MainWidgets {
    pub wind: Window,
    pub flex: Flex,
    pub menu: MenuBar,
    pub folder_display: Output,
    pub combo: Choice,
    pub btn_edit: Button,
    pub btn_delete: Button,
    pub btn_export: Button,
    pub btn_apply: Button,
    pub update_banner: Button,
}

pub fn build_main_window(lang: Language, sender: &Sender<Message>) -> MainWidgets {
    let mut wind = Window::new(100, 100, 620, 190, "AutoStyle");
    wind.set_xclass("AutoStyle");

    let mut flex = Flex::new(0, 0, 620, 190, None);
    flex.set_type(fltk::group::FlexType::Column);
    flex.set_margin(8);
    flex.set_spacing(8);

    let menu = MenuBar::new(0, 0, 0, 30, "");
    flex.fixed(&menu, 30);

    // Project folder row
    let mut folder_row = Flex::default();
    folder_row.set_type(fltk::group::FlexType::Row);
    folder_row.set_spacing(8);

    let folder_label = Frame::default().with_label(tr(lang, "project_folder_label"));
    folder_row.fixed(&folder_label, 110);

    let mut folder_display = Output::default();
    folder_display.set_value(tr(lang, "no_project_folder"));

    let mut btn_browse = Button::default().with_label(tr(lang, "browse_button"));
    folder_row.fixed(&btn_browse, 90);
    btn_browse.set_callback({
        let s = *sender;
        move |_| s.send(Message::ChooseProjectFolder)
    });

    folder_row.end();
    flex.fixed(&folder_row, 28);

    // Config selection row
    let mut config_row = Flex::default();
    config_row.set_type(fltk::group::FlexType::Row);
    config_row.set_spacing(8);

    let config_label = Frame::default().with_label(tr(lang, "select_config"));
    config_row.fixed(&config_label, 110);

    let mut combo = Choice::default();
    combo.set_callback({
        let s = *sender;
        move |_| s.send(Message::ConfigSelectionChanged)
    });

    let mut btn_add = Button::default().with_label("+");
    btn_add.set_tooltip(tr(lang, "add_config_tooltip"));
    btn_add.set_callback({
        let s = *sender;
        move |_| s.send(Message::AddConfig)
    });
    config_row.fixed(&btn_add, 28);

    let mut btn_edit = Button::default().with_label("...");
    btn_edit.set_tooltip(tr(lang, "edit_config_tooltip"));
    btn_edit.set_callback({
        let s = *sender;
        move |_| s.send(Message::EditConfig)
    });
    config_row.fixed(&btn_edit, 28);

    let mut btn_delete = Button::default().with_label("-");
    btn_delete.set_tooltip(tr(lang, "delete_config_tooltip"));
    btn_delete.set_callback({
        let s = *sender;
        move |_| s.send(Message::DeleteConfig)
    });
    config_row.fixed(&btn_delete, 28);

    let mut btn_export = Button::default().with_label("@filesaveas");
    btn_export.set_tooltip(tr(lang, "export_config_tooltip"));
    btn_export.set_callback({
        let s = *sender;
        move |_| s.send(Message::ExportConfig)
    });
    config_row.fixed(&btn_export, 28);

    let mut btn_import = Button::default().with_label("@fileopen");
    btn_import.set_tooltip(tr(lang, "import_config_tooltip"));
    btn_import.set_callback({
        let s = *sender;
        move |_| s.send(Message::ImportConfig)
    });
    config_row.fixed(&btn_import, 28);

    config_row.end();
    flex.fixed(&config_row, 28);

    // Update notification banner (initially hidden)
    let mut update_banner = Button::default().with_size(0, 0);
    update_banner.set_frame(fltk::enums::FrameType::FlatBox);
    update_banner.set_color(Color::from_rgb(255, 250, 205));
    update_banner.set_label_color(Color::Black);
    update_banner.set_label_size(12);
    update_banner.hide();
    flex.fixed(&update_banner, 0);
    update_banner.set_callback({
        let s = *sender;
        move |_| s.send(Message::ShowBannerUpdate)
    });

    // Action button row
    let mut action_row = Flex::default();
    action_row.set_type(fltk::group::FlexType::Row);
    action_row.set_spacing(8);

    let mut btn_help = Button::default().with_label(tr(lang, "help_link"));
    btn_help.set_frame(fltk::enums::FrameType::NoBox);
    btn_help.set_label_color(Color::from_rgb(26, 115, 232));
    btn_help.set_callback({
        let s = *sender;
        move |_| s.send(Message::ShowHelp)
    });
    action_row.fixed(&btn_help, 90);

    let _spacer = Frame::default();

    let mut btn_apply = Button::default().with_label(tr(lang, "apply_button"));
    btn_apply.set_callback({
        let s = *sender;
        move |_| s.send(Message::ApplyStyles)
    });
    action_row.fixed(&btn_apply, 110);

    let mut btn_close = Button::default().with_label(tr(lang, "close_button"));
    btn_close.set_callback({
        let s = *sender;
        move |_| s.send(Message::Quit)
    });
    action_row.fixed(&btn_close, 90);

    action_row.end();
    flex.fixed(&action_row, 32);

    flex.end();
    wind.end();
    wind.resizable(&flex);

    MainWidgets {
        wind,
        flex,
        menu,
        folder_display,
        combo,
        btn_edit,
        btn_delete,
        btn_export,
        btn_apply,
        update_banner,
    }
}
