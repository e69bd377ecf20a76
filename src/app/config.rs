use regex_lite::Regex;
use serde::{Deserialize, Serialize};

use super::error::{AppError, Result};

/// One regex-to-stylesheet mapping. Serialized as a two-element array
/// `[pattern, style_path]`, which is the on-disk rule shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "(String, String)", into = "(String, String)")]
pub struct StyleRule {
    pub pattern: String,
    pub style_path: String,
}

impl From<(String, String)> for StyleRule {
    fn from((pattern, style_path): (String, String)) -> Self {
        Self {
            pattern,
            style_path,
        }
    }
}

impl From<StyleRule> for (String, String) {
    fn from(rule: StyleRule) -> Self {
        (rule.pattern, rule.style_path)
    }
}

impl StyleRule {
    pub fn new(pattern: impl Into<String>, style_path: impl Into<String>) -> Self {
        Self {
            pattern: pattern.into(),
            style_path: style_path.into(),
        }
    }
}

/// A user-named, ordered set of style rules.
///
/// Rule order is significant: the applier stops at the first rule whose
/// pattern matches a layer name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StyleConfig {
    pub name: String,
    #[serde(default)]
    pub rules: Vec<StyleRule>,
}

impl StyleConfig {
    pub fn new(name: impl Into<String>, rules: Vec<StyleRule>) -> Self {
        Self {
            name: name.into(),
            rules,
        }
    }

    /// Every pattern must compile. Enforced at save time; style paths are
    /// only checked when styles are applied.
    pub fn validate_patterns(&self) -> Result<()> {
        for rule in &self.rules {
            Regex::new(&rule.pattern).map_err(|e| AppError::InvalidPattern {
                pattern: rule.pattern.clone(),
                detail: e.to_string(),
            })?;
        }
        Ok(())
    }
}

/// Parse the edit form's rule text: one `pattern | path` per line, blank
/// lines skipped. The separator is the *last* `|` on the line so regex
/// alternation inside the pattern survives.
pub fn parse_rule_lines(text: &str) -> Result<Vec<StyleRule>> {
    let mut rules = Vec::new();

    for (idx, raw) in text.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        let Some((pattern, style_path)) = line.rsplit_once('|') else {
            return Err(AppError::RuleFormat {
                line: idx + 1,
                content: line.to_string(),
            });
        };

        let pattern = pattern.trim();
        let style_path = style_path.trim();
        if pattern.is_empty() || style_path.is_empty() {
            return Err(AppError::RuleFormat {
                line: idx + 1,
                content: line.to_string(),
            });
        }

        rules.push(StyleRule::new(pattern, style_path));
    }

    Ok(rules)
}

/// Inverse of [`parse_rule_lines`], used to fill the edit form.
pub fn render_rule_lines(rules: &[StyleRule]) -> String {
    rules
        .iter()
        .map(|r| format!("{} | {}", r.pattern, r.style_path))
        .collect::<Vec<_>>()
        .join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_serializes_as_pair() {
        let rule = StyleRule::new("^road.*", "/styles/road.qml");
        let json = serde_json::to_string(&rule).unwrap();
        assert_eq!(json, r#"["^road.*","/styles/road.qml"]"#);

        let back: StyleRule = serde_json::from_str(&json).unwrap();
        assert_eq!(back, rule);
    }

    #[test]
    fn test_config_round_trip_preserves_order() {
        let config = StyleConfig::new(
            "base map",
            vec![
                StyleRule::new("^road", "road.qml"),
                StyleRule::new("^river", "river.qml"),
                StyleRule::new(".*", "fallback.qml"),
            ],
        );
        let json = serde_json::to_string(&config).unwrap();
        let back: StyleConfig = serde_json::from_str(&json).unwrap();
        assert_eq!(back, config);
    }

    #[test]
    fn test_wire_shape() {
        let json = r#"{"name": "demo", "rules": [["^road.*", "road.qml"]]}"#;
        let config: StyleConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.rules.len(), 1);
        assert_eq!(config.rules[0].pattern, "^road.*");
        assert_eq!(config.rules[0].style_path, "road.qml");
    }

    #[test]
    fn test_validate_patterns_ok() {
        let config = StyleConfig::new("ok", vec![StyleRule::new("^road(_\\d+)?$", "r.qml")]);
        assert!(config.validate_patterns().is_ok());
    }

    #[test]
    fn test_validate_patterns_rejects_bad_regex() {
        let config = StyleConfig::new("bad", vec![StyleRule::new("^road[", "r.qml")]);
        let err = config.validate_patterns().unwrap_err();
        assert!(matches!(err, AppError::InvalidPattern { .. }));
    }

    #[test]
    fn test_parse_rule_lines_basic() {
        let rules = parse_rule_lines("^road.* | road.qml\n^river | river.qml\n").unwrap();
        assert_eq!(
            rules,
            vec![
                StyleRule::new("^road.*", "road.qml"),
                StyleRule::new("^river", "river.qml"),
            ]
        );
    }

    #[test]
    fn test_parse_rule_lines_skips_blank_lines() {
        let rules = parse_rule_lines("\n^a | a.qml\n\n   \n^b | b.qml\n").unwrap();
        assert_eq!(rules.len(), 2);
    }

    #[test]
    fn test_parse_rule_lines_alternation_in_pattern() {
        // Last '|' wins, so the pattern may contain alternation.
        let rules = parse_rule_lines("road|street|lane | road.qml").unwrap();
        assert_eq!(rules[0].pattern, "road|street|lane");
        assert_eq!(rules[0].style_path, "road.qml");
    }

    #[test]
    fn test_parse_rule_lines_reports_line_number() {
        let err = parse_rule_lines("^a | a.qml\nbroken line").unwrap_err();
        match err {
            AppError::RuleFormat { line, content } => {
                assert_eq!(line, 2);
                assert_eq!(content, "broken line");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_parse_rule_lines_rejects_empty_sides() {
        assert!(parse_rule_lines(" | road.qml").is_err());
        assert!(parse_rule_lines("^road | ").is_err());
    }

    #[test]
    fn test_render_parse_round_trip() {
        let rules = vec![
            StyleRule::new("^road.*", "/s/road.qml"),
            StyleRule::new("lake|pond", "/s/water.qml"),
        ];
        let text = render_rule_lines(&rules);
        assert_eq!(parse_rule_lines(&text).unwrap(), rules);
    }
}
