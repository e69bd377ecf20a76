use fltk::{
    app::Sender,
    enums::Shortcut,
    menu::{MenuBar, MenuFlag},
    prelude::*,
};

use crate::app::i18n::{tr, Language};
use crate::app::messages::Message;

pub fn build_menu(menu: &mut MenuBar, sender: &Sender<Message>, lang: Language) {
    let s = sender;

    // File
    menu.add(tr(lang, "menu_open_project"), Shortcut::Ctrl | 'o', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ChooseProjectFolder) });
    menu.add(tr(lang, "menu_settings"), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::OpenSettings) });
    menu.add(tr(lang, "menu_quit"), Shortcut::Ctrl | 'q', MenuFlag::Normal, { let s = *s; move |_| s.send(Message::Quit) });

    // Help
    menu.add(tr(lang, "menu_help_contents"), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowHelp) });
    menu.add(tr(lang, "check_update_menu"), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::CheckForUpdates) });
    menu.add(tr(lang, "menu_about"), Shortcut::None, MenuFlag::Normal, { let s = *s; move |_| s.send(Message::ShowAbout) });
}
