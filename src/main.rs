use std::cell::RefCell;
use std::rc::Rc;

use fltk::{app, prelude::*};
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

use auto_style::app::messages::Message;
use auto_style::app::settings::AppSettings;
use auto_style::app::state::AppState;
use auto_style::app::store::ConfigStore;
use auto_style::app::updater::{check_for_updates, should_check_now, UpdateCheckResult};
use auto_style::ui::main_window::build_main_window;
use auto_style::ui::menu::build_menu;

fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .finish();
    let _ = tracing::subscriber::set_global_default(subscriber);

    let settings = AppSettings::load();
    let lang = settings.effective_language();
    let settings = Rc::new(RefCell::new(settings));

    let fltk_app = app::App::default();

    let store = match ConfigStore::open_default() {
        Ok(store) => store,
        Err(e) => {
            fltk::dialog::alert_default(&format!("Failed to open config storage: {}", e));
            return;
        }
    };
    info!("config store at {}", store.styles_dir().display());

    let (sender, receiver) = app::channel::<Message>();

    let mut widgets = build_main_window(lang, &sender);
    build_menu(&mut widgets.menu, &sender, lang);
    widgets.wind.show();

    let mut state = AppState::new(widgets, sender, settings.clone(), store, lang);

    // Startup update check, off the UI thread; the result comes back
    // through the channel.
    {
        let settings_ref = settings.borrow();
        if settings_ref.auto_check_updates && should_check_now(settings_ref.last_update_check) {
            let skipped = settings_ref.skipped_versions.clone();
            std::thread::spawn(move || {
                let result = match check_for_updates(env!("CARGO_PKG_VERSION"), &skipped) {
                    UpdateCheckResult::UpdateAvailable(release) => Some(release),
                    UpdateCheckResult::NoUpdate => None,
                    UpdateCheckResult::Error(e) => {
                        info!("startup update check failed: {}", e);
                        None
                    }
                };
                sender.send(Message::BackgroundUpdateResult(result));
            });
        }
    }

    while fltk_app.wait() {
        if let Some(msg) = receiver.recv() {
            state.handle(msg);
        }
    }
}
