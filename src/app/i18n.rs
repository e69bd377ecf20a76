//! Interface language selection and string lookup.
//!
//! Simplified and Traditional Chinese locales use the Chinese table, every
//! other locale uses English. The lookup itself is a pure function over a
//! fixed table; the only environment access is [`detect_system_language`].

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Language {
    English,
    Chinese,
}

impl Language {
    /// Map a locale code to a display language: `zh*` is Chinese, anything
    /// else (including an empty code) is English.
    pub fn from_locale(locale: &str) -> Self {
        if locale.starts_with("zh") {
            Language::Chinese
        } else {
            Language::English
        }
    }
}

/// Language implied by the process environment, in the usual precedence
/// order. Used when the settings say "system default".
pub fn detect_system_language() -> Language {
    for var in ["LC_ALL", "LC_MESSAGES", "LANG"] {
        if let Ok(value) = std::env::var(var) {
            if !value.is_empty() {
                return Language::from_locale(&value);
            }
        }
    }
    Language::English
}

/// Look up a display string. Unknown keys come back verbatim, which keeps a
/// missing entry visible instead of crashing the UI.
pub fn tr(lang: Language, key: &'static str) -> &'static str {
    match TABLE.iter().find(|(k, _, _)| *k == key) {
        Some((_, en, zh)) => match lang {
            Language::English => en,
            Language::Chinese => zh,
        },
        None => key,
    }
}

/// [`tr`] plus `{placeholder}` substitution.
pub fn tr_fmt(lang: Language, key: &'static str, args: &[(&str, &str)]) -> String {
    let mut text = tr(lang, key).to_string();
    for (name, value) in args {
        text = text.replace(&format!("{{{name}}}"), value);
    }
    text
}

/// (key, English, Chinese)
static TABLE: &[(&str, &str, &str)] = &[
    // Main panel
    ("select_config", "Select Config:", "选择配置表:"),
    ("project_folder_label", "Project Folder:", "工程目录:"),
    ("no_project_folder", "(not set)", "(未设置)"),
    ("browse_button", "Browse...", "浏览..."),
    ("add_config_tooltip", "Add Config", "新增配置表"),
    ("edit_config_tooltip", "Edit Config", "编辑配置表"),
    ("delete_config_tooltip", "Delete Config", "删除配置表"),
    ("export_config_tooltip", "Export Config", "导出配置表"),
    ("import_config_tooltip", "Import Config", "导入配置表"),
    ("help_link", "Help", "使用说明"),
    ("apply_button", "Apply", "一键应用"),
    ("close_button", "Close", "关闭"),
    // Menus
    ("menu_open_project", "File/Open Project Folder...", "文件/打开工程目录..."),
    ("menu_settings", "File/Settings...", "文件/设置..."),
    ("menu_quit", "File/Quit", "文件/退出"),
    ("menu_help_contents", "Help/Usage", "帮助/使用说明"),
    ("check_update_menu", "Help/Check for Updates...", "帮助/检查更新..."),
    ("menu_about", "Help/About AutoStyle", "帮助/关于 AutoStyle"),
    // Shared dialog buttons
    ("ok_button", "OK", "确定"),
    ("save_button", "Save", "保存"),
    ("cancel_button", "Cancel", "取消"),
    // Generic titles
    ("error_title", "Error", "错误"),
    ("hint_title", "Info", "提示"),
    // Config list operations
    ("confirm_delete_title", "Confirm Delete", "确认删除"),
    (
        "confirm_delete_msg",
        "Are you sure you want to delete config \"{name}\"?",
        "确定要删除样式表 \"{name}\" 吗？",
    ),
    ("delete_failed_title", "Delete Failed", "删除失败"),
    (
        "load_config_error",
        "Failed to load config: {name}",
        "无法加载配置表: {name}",
    ),
    ("no_config_selected", "No config selected", "未选择配置表"),
    // Edit dialog
    ("edit_dialog_title_add", "Add Config", "新增配置表"),
    ("edit_dialog_title_edit", "Edit Config", "编辑配置表"),
    ("config_name_label", "Name:", "名称:"),
    ("rules_label", "Rules:", "规则:"),
    (
        "rules_hint",
        "One rule per line: pattern | style.qml (first match wins)",
        "每行一条规则: 正则 | 样式文件.qml (首条匹配生效)",
    ),
    ("browse_style_button", "Add Style File...", "添加样式文件..."),
    ("config_name_empty", "Config name must not be empty", "配置表名称不能为空"),
    (
        "save_config_failed",
        "Failed to save config: {error}",
        "保存配置表失败: {error}",
    ),
    // Apply flow
    (
        "no_project_hint",
        "Choose a project folder first",
        "请先选择工程目录",
    ),
    (
        "project_scan_failed",
        "Failed to scan project folder: {error}",
        "扫描工程目录失败: {error}",
    ),
    ("no_rules_hint", "No style rules in the config", "配置表中没有样式规则"),
    ("apply_result_title", "Apply Result", "应用结果"),
    ("apply_result_complete", "Style application completed:", "样式应用完成:"),
    ("apply_result_success", "Success: {count} layer(s)", "成功: {count} 个图层"),
    ("apply_result_failed", "Failed: {count} layer(s)", "失败: {count} 个图层"),
    (
        "apply_result_unmatched",
        "Unmatched: {count} layer(s)",
        "未匹配: {count} 个图层",
    ),
    ("apply_result_details", "Details:", "详情:"),
    ("no_layers", "No layers in the current project", "当前工程中没有图层"),
    ("no_valid_rules", "No valid rules to apply", "没有可用的有效规则"),
    (
        "regex_compile_failed",
        "Invalid pattern \"{pattern}\": {error}",
        "正则表达式 \"{pattern}\" 无效: {error}",
    ),
    (
        "style_file_not_exist",
        "Layer \"{layer}\": style file not found: {file}",
        "图层 \"{layer}\": 样式文件不存在: {file}",
    ),
    (
        "style_apply_success",
        "Layer \"{layer}\" styled (pattern \"{pattern}\")",
        "图层 \"{layer}\" 样式应用成功 (规则 \"{pattern}\")",
    ),
    (
        "style_apply_failed",
        "Layer \"{layer}\": failed to apply {file}: {error}",
        "图层 \"{layer}\": 应用 {file} 失败: {error}",
    ),
    ("layer_unmatched", "Layer \"{layer}\" matched no rule", "图层 \"{layer}\" 未匹配任何规则"),
    // Import / export
    ("export_config_title", "Export Config", "导出配置表"),
    ("import_config_title", "Import Config", "导入配置表"),
    (
        "export_success",
        "Config exported to {path}",
        "配置表已导出至 {path}",
    ),
    ("export_failed", "Export failed: {error}", "导出失败: {error}"),
    (
        "import_success",
        "Config \"{name}\" imported",
        "配置表 \"{name}\" 导入成功",
    ),
    ("import_failed", "Import failed: {error}", "导入失败: {error}"),
    ("confirm_overwrite_title", "Confirm Overwrite", "确认覆盖"),
    (
        "import_config_exists",
        "Config \"{name}\" already exists. Overwrite it?",
        "配置表 \"{name}\" 已存在，是否覆盖？",
    ),
    // Settings dialog
    ("settings_title", "Settings", "设置"),
    ("language_label", "Language:", "界面语言:"),
    ("language_system", "System Default", "跟随系统"),
    ("language_english", "English", "English"),
    ("language_chinese", "中文", "中文"),
    ("updates_label", "Updates:", "更新:"),
    (
        "auto_check_updates_label",
        "Automatically check for updates",
        "启动时自动检查更新",
    ),
    // Updates
    ("update_available_title", "Update Available", "发现新版本"),
    (
        "update_banner",
        "AutoStyle {version} is available - click for details",
        "AutoStyle {version} 已发布 - 点击查看详情",
    ),
    (
        "update_version_info",
        "Current version: {current}\nLatest version:  {latest}",
        "当前版本: {current}\n最新版本: {latest}",
    ),
    ("whats_new_label", "What's new:", "更新内容:"),
    ("view_release_button", "View Release", "查看发布页"),
    ("skip_version_button", "Skip This Version", "跳过此版本"),
    ("remind_later_button", "Remind Later", "稍后提醒"),
    (
        "up_to_date_msg",
        "You're up to date!\n\nAutoStyle {version} is the latest version.",
        "当前已是最新版本！\n\nAutoStyle {version} 无需更新。",
    ),
    (
        "update_check_failed",
        "Failed to check for updates:\n\n{error}\n\nPlease try again later.",
        "检查更新失败:\n\n{error}\n\n请稍后重试。",
    ),
    // Help / About
    ("help_title", "AutoStyle Usage", "AutoStyle 使用说明"),
    (
        "help_content",
        "AutoStyle batch-applies QML styles to project layers.\n\n\
         1. Choose the project folder that holds your layer data files.\n\
         2. Create a config: one rule per line, \"pattern | style.qml\".\n\
         3. Patterns are regular expressions matched anywhere in the layer\n\
            name; the first matching rule wins. Use ^ and $ to anchor.\n\
         4. Click Apply. Each matched layer gets the rule's QML installed\n\
            as a sidecar file the GIS application loads automatically.\n\n\
         Layers that match no rule are left unchanged. Applying a config\n\
         twice is safe; styles are simply written again.",
        "AutoStyle 用于批量为工程图层应用 QML 样式。\n\n\
         1. 选择包含图层数据文件的工程目录。\n\
         2. 新建配置表: 每行一条规则，格式为 \"正则 | 样式.qml\"。\n\
         3. 规则为正则表达式，在图层名称中任意位置匹配，首条匹配的\n\
            规则生效。可用 ^ 与 $ 锚定。\n\
         4. 点击\u{201c}一键应用\u{201d}。匹配图层的样式会以随附文件形式安装，\n\
            GIS 应用打开图层时自动加载。\n\n\
         未匹配任何规则的图层保持不变。重复应用同一配置表是安全的。",
    ),
    ("about_title", "About AutoStyle", "关于 AutoStyle"),
    (
        "about_description",
        "Batch-apply QML cartographic styles to GIS project layers by regex",
        "通过正则表达式批量为 GIS 工程图层应用 QML 制图样式",
    ),
    ("version_label", "Version {version}", "版本 {version}"),
];
