use std::path::PathBuf;

/// Application data directory: data_dir/autostyle/
///
/// Kept outside the config dir so style configs survive settings resets.
pub fn data_dir() -> PathBuf {
    let mut path = dirs::data_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("autostyle");
    path
}

/// Directory holding one JSON document per style config.
pub fn styles_dir() -> PathBuf {
    let mut path = data_dir();
    path.push("styles");
    path
}

/// Replace characters that are unsafe in filenames on any supported platform.
/// The config's real name lives inside the document, so this mapping does not
/// need to be reversible.
pub fn sanitize_filename(name: &str) -> String {
    name.chars()
        .map(|c| match c {
            '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*' => '_',
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_styles_dir_under_data_dir() {
        let styles = styles_dir();
        assert!(styles.starts_with(data_dir()));
        assert!(styles.ends_with("styles"));
    }

    #[test]
    fn test_sanitize_plain_name() {
        assert_eq!(sanitize_filename("urban roads"), "urban roads");
    }

    #[test]
    fn test_sanitize_unsafe_characters() {
        assert_eq!(sanitize_filename("a/b\\c:d"), "a_b_c_d");
        assert_eq!(sanitize_filename("<roads>?*|\""), "________");
    }

    #[test]
    fn test_sanitize_keeps_unicode() {
        assert_eq!(sanitize_filename("道路样式"), "道路样式");
    }
}
