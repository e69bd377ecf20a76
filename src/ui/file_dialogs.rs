use fltk::dialog::{FileDialogType, NativeFileChooser};

fn chooser_result(mut nfc: NativeFileChooser) -> Option<String> {
    nfc.show(); // returns (), blocks until close
    let filename = nfc.filename();
    let s = filename.to_string_lossy();
    if s.is_empty() { None } else { Some(s.to_string()) }
}

pub fn native_open_dialog(filter: &str) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseFile);
    nfc.set_filter(filter);
    chooser_result(nfc)
}

pub fn native_save_dialog(filter: &str, preset_name: &str) -> Option<String> {
    let mut nfc = NativeFileChooser::new(FileDialogType::BrowseSaveFile);
    nfc.set_filter(filter);
    nfc.set_preset_file(preset_name);
    chooser_result(nfc)
}

pub fn native_folder_dialog() -> Option<String> {
    let nfc = NativeFileChooser::new(FileDialogType::BrowseDir);
    chooser_result(nfc)
}
