use std::cell::RefCell;
use std::rc::Rc;

use fltk::{button::Button, group::Flex, prelude::*, window::Window};

use super::i18n::{tr_fmt, Language};
use super::settings::AppSettings;
use super::updater::ReleaseInfo;
use crate::ui::dialogs::update::show_update_available_dialog;

pub struct BannerWidgets<'a> {
    pub banner: &'a mut Button,
    pub flex: &'a mut Flex,
    pub window: &'a mut Window,
}

/// Holds a release reported by the background check until the user clicks
/// the banner.
pub struct UpdateController {
    pub pending_update: Option<ReleaseInfo>,
}

impl UpdateController {
    pub fn new() -> Self {
        Self {
            pending_update: None,
        }
    }

    pub fn show_banner(&self, lang: Language, version: &str, widgets: &mut BannerWidgets) {
        widgets
            .banner
            .set_label(&tr_fmt(lang, "update_banner", &[("version", version)]));
        widgets.banner.show();
        widgets.flex.fixed(&*widgets.banner, 26);
        widgets.window.redraw();
    }

    pub fn hide_banner(&self, widgets: &mut BannerWidgets) {
        widgets.banner.hide();
        widgets.flex.fixed(&*widgets.banner, 0);
        widgets.window.redraw();
    }

    pub fn receive_update(&mut self, lang: Language, release: ReleaseInfo, widgets: &mut BannerWidgets) {
        let version = release.version();
        self.pending_update = Some(release);
        self.show_banner(lang, &version, widgets);
    }

    pub fn show_update_dialog(
        &mut self,
        lang: Language,
        settings: &Rc<RefCell<AppSettings>>,
        widgets: &mut BannerWidgets,
    ) {
        if let Some(release) = self.pending_update.take() {
            show_update_available_dialog(lang, release, settings);
            self.hide_banner(widgets);
        }
    }
}
