use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;

use fltk::{
    app,
    app::Sender,
    button::Button,
    dialog,
    group::Flex,
    menu::Choice,
    output::Output,
    prelude::*,
    window::Window,
};
use tracing::error;

use super::applier::apply_rules;
use super::i18n::{tr, tr_fmt, Language};
use super::messages::Message;
use super::project::FolderProject;
use super::settings::AppSettings;
use super::store::ConfigStore;
use super::update_controller::{BannerWidgets, UpdateController};
use super::updater::{current_timestamp, ReleaseInfo};
use crate::app::error::AppError;
use crate::ui::dialogs::about::show_about_dialog;
use crate::ui::dialogs::apply_result::show_apply_report;
use crate::ui::dialogs::edit_config::show_edit_config_dialog;
use crate::ui::dialogs::help::show_help_dialog;
use crate::ui::dialogs::settings_dialog::show_settings_dialog;
use crate::ui::dialogs::update::check_for_updates_ui;
use crate::ui::file_dialogs::{native_folder_dialog, native_open_dialog, native_save_dialog};
use crate::ui::main_window::MainWidgets;

pub struct AppState {
    pub window: Window,
    pub flex: Flex,
    pub folder_display: Output,
    pub combo: Choice,
    pub btn_edit: Button,
    pub btn_delete: Button,
    pub btn_export: Button,
    pub btn_apply: Button,
    pub update_banner: Button,
    pub sender: Sender<Message>,
    pub settings: Rc<RefCell<AppSettings>>,
    pub store: ConfigStore,
    pub lang: Language,
    pub update: UpdateController,
}

impl AppState {
    pub fn new(
        widgets: MainWidgets,
        sender: Sender<Message>,
        settings: Rc<RefCell<AppSettings>>,
        store: ConfigStore,
        lang: Language,
    ) -> Self {
        let mut state = Self {
            window: widgets.wind,
            flex: widgets.flex,
            folder_display: widgets.folder_display,
            combo: widgets.combo,
            btn_edit: widgets.btn_edit,
            btn_delete: widgets.btn_delete,
            btn_export: widgets.btn_export,
            btn_apply: widgets.btn_apply,
            update_banner: widgets.update_banner,
            sender,
            settings,
            store,
            lang,
            update: UpdateController::new(),
        };

        if let Some(dir) = state.settings.borrow().last_project_dir.clone() {
            state.folder_display.set_value(&dir);
        }
        let last = state.settings.borrow().last_config.clone();
        state.reload_configs(last.as_deref());
        state
    }

    /// Refill the config dropdown, preferring the given selection.
    pub fn reload_configs(&mut self, select: Option<&str>) {
        self.combo.clear();
        let names = self.store.list();
        for name in &names {
            self.combo.add_choice(name);
        }

        if !names.is_empty() {
            let index = select
                .and_then(|wanted| names.iter().position(|n| n == wanted))
                .unwrap_or(0);
            self.combo.set_value(index as i32);
        }
        self.update_button_states();
    }

    fn current_config_name(&self) -> Option<String> {
        self.combo.choice()
    }

    fn update_button_states(&mut self) {
        let has_config = self.combo.size() > 0 && self.combo.choice().is_some();
        for btn in [
            &mut self.btn_edit,
            &mut self.btn_delete,
            &mut self.btn_export,
            &mut self.btn_apply,
        ] {
            if has_config {
                btn.activate();
            } else {
                btn.deactivate();
            }
        }
    }

    fn persist_selection(&self) {
        let mut settings = self.settings.borrow_mut();
        settings.last_config = self.current_config_name();
        if let Err(e) = settings.save() {
            error!("failed to save settings: {}", e);
        }
    }

    pub fn handle(&mut self, msg: Message) {
        match msg {
            Message::ChooseProjectFolder => self.choose_project_folder(),
            Message::ConfigSelectionChanged => {
                self.update_button_states();
                self.persist_selection();
            }
            Message::AddConfig => self.add_config(),
            Message::EditConfig => self.edit_config(),
            Message::DeleteConfig => self.delete_config(),
            Message::ImportConfig => self.import_config(),
            Message::ExportConfig => self.export_config(),
            Message::ApplyStyles => self.apply_styles(),
            Message::OpenSettings => self.open_settings(),
            Message::ShowHelp => show_help_dialog(self.lang),
            Message::ShowAbout => show_about_dialog(self.lang),
            Message::CheckForUpdates => check_for_updates_ui(self.lang, &self.settings),
            Message::BackgroundUpdateResult(result) => self.background_update_result(result),
            Message::ShowBannerUpdate => {
                let settings = self.settings.clone();
                let mut widgets = BannerWidgets {
                    banner: &mut self.update_banner,
                    flex: &mut self.flex,
                    window: &mut self.window,
                };
                self.update.show_update_dialog(self.lang, &settings, &mut widgets);
            }
            Message::Quit => app::quit(),
        }
    }

    fn choose_project_folder(&mut self) {
        if let Some(dir) = native_folder_dialog() {
            self.folder_display.set_value(&dir);
            let mut settings = self.settings.borrow_mut();
            settings.last_project_dir = Some(dir);
            if let Err(e) = settings.save() {
                error!("failed to save settings: {}", e);
            }
        }
    }

    fn add_config(&mut self) {
        if let Some(name) = show_edit_config_dialog(self.lang, &self.store, None) {
            self.reload_configs(Some(&name));
            self.persist_selection();
        }
    }

    fn edit_config(&mut self) {
        let Some(current) = self.current_config_name() else {
            return;
        };

        let config = match self.store.load(&current) {
            Ok(config) => config,
            Err(e) => {
                error!("failed to load config \"{}\": {}", current, e);
                dialog::alert_default(&tr_fmt(
                    self.lang,
                    "load_config_error",
                    &[("name", &current)],
                ));
                return;
            }
        };

        if let Some(name) = show_edit_config_dialog(self.lang, &self.store, Some(config)) {
            self.reload_configs(Some(&name));
            self.persist_selection();
        }
    }

    fn delete_config(&mut self) {
        let Some(current) = self.current_config_name() else {
            return;
        };

        let prompt = tr_fmt(self.lang, "confirm_delete_msg", &[("name", &current)]);
        let choice = dialog::choice2_default(
            &prompt,
            tr(self.lang, "cancel_button"),
            tr(self.lang, "ok_button"),
            "",
        );
        if choice != Some(1) {
            return;
        }

        match self.store.delete(&current) {
            Ok(()) => {
                self.reload_configs(None);
                self.persist_selection();
            }
            Err(e) => {
                dialog::alert_default(&format!("{}: {}", tr(self.lang, "delete_failed_title"), e));
            }
        }
    }

    fn import_config(&mut self) {
        let Some(path) = native_open_dialog("*.json") else {
            return;
        };
        let path = Path::new(&path);

        let imported = match self.store.import(path, false) {
            Ok(name) => Some(name),
            Err(AppError::ConfigExists { name }) => {
                let prompt = tr_fmt(self.lang, "import_config_exists", &[("name", &name)]);
                let choice = dialog::choice2_default(
                    &prompt,
                    tr(self.lang, "cancel_button"),
                    tr(self.lang, "ok_button"),
                    "",
                );
                if choice == Some(1) {
                    match self.store.import(path, true) {
                        Ok(name) => Some(name),
                        Err(e) => {
                            dialog::alert_default(&tr_fmt(
                                self.lang,
                                "import_failed",
                                &[("error", &e.to_string())],
                            ));
                            None
                        }
                    }
                } else {
                    None
                }
            }
            Err(e) => {
                dialog::alert_default(&tr_fmt(
                    self.lang,
                    "import_failed",
                    &[("error", &e.to_string())],
                ));
                None
            }
        };

        if let Some(name) = imported {
            self.reload_configs(Some(&name));
            self.persist_selection();
            dialog::message_default(&tr_fmt(self.lang, "import_success", &[("name", &name)]));
        }
    }

    fn export_config(&mut self) {
        let Some(current) = self.current_config_name() else {
            dialog::message_default(tr(self.lang, "no_config_selected"));
            return;
        };

        let preset = format!("{}.json", crate::app::paths::sanitize_filename(&current));
        let Some(dest) = native_save_dialog("*.json", &preset) else {
            return;
        };

        match self.store.export(&current, Path::new(&dest)) {
            Ok(()) => {
                dialog::message_default(&tr_fmt(self.lang, "export_success", &[("path", &dest)]));
            }
            Err(e) => {
                dialog::alert_default(&tr_fmt(
                    self.lang,
                    "export_failed",
                    &[("error", &e.to_string())],
                ));
            }
        }
    }

    fn apply_styles(&mut self) {
        let Some(current) = self.current_config_name() else {
            return;
        };

        let Some(dir) = self.settings.borrow().last_project_dir.clone() else {
            dialog::message_default(tr(self.lang, "no_project_hint"));
            return;
        };

        let config = match self.store.load(&current) {
            Ok(config) => config,
            Err(e) => {
                error!("failed to load config \"{}\": {}", current, e);
                dialog::alert_default(&tr_fmt(
                    self.lang,
                    "load_config_error",
                    &[("name", &current)],
                ));
                return;
            }
        };

        if config.rules.is_empty() {
            dialog::message_default(tr(self.lang, "no_rules_hint"));
            return;
        }

        let mut project = match FolderProject::scan(Path::new(&dir)) {
            Ok(project) => project,
            Err(e) => {
                dialog::alert_default(&tr_fmt(
                    self.lang,
                    "project_scan_failed",
                    &[("error", &e.to_string())],
                ));
                return;
            }
        };

        let report = apply_rules(&config.rules, project.layers_mut(), self.lang);
        show_apply_report(self.lang, &report);
    }

    fn open_settings(&mut self) {
        let current = self.settings.borrow().clone();
        if let Some(new_settings) = show_settings_dialog(self.lang, &current) {
            *self.settings.borrow_mut() = new_settings;
            if let Err(e) = self.settings.borrow().save() {
                error!("failed to save settings: {}", e);
            }
        }
    }

    fn background_update_result(&mut self, result: Option<ReleaseInfo>) {
        {
            let mut settings = self.settings.borrow_mut();
            settings.last_update_check = current_timestamp();
            let _ = settings.save();
        }
        if let Some(release) = result {
            let mut widgets = BannerWidgets {
                banner: &mut self.update_banner,
                flex: &mut self.flex,
                window: &mut self.window,
            };
            self.update.receive_update(self.lang, release, &mut widgets);
        }
    }
}
