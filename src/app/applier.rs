use std::path::Path;

use regex_lite::Regex;
use tracing::{info, warn};

use super::config::StyleRule;
use super::i18n::{tr, tr_fmt, Language};
use super::project::Layer;

/// Outcome of one apply run. Detail lines are already localized; the dialog
/// shows them verbatim.
#[derive(Debug, Default)]
pub struct ApplyReport {
    pub styled: usize,
    pub failed: usize,
    pub unmatched: usize,
    pub details: Vec<String>,
}

struct CompiledRule {
    regex: Regex,
    pattern: String,
    style_path: String,
}

/// Compile rule patterns in declared order. A rule that fails to compile is
/// reported and dropped; the remaining rules still apply.
fn compile_rules(rules: &[StyleRule], lang: Language, details: &mut Vec<String>) -> Vec<CompiledRule> {
    let mut compiled = Vec::with_capacity(rules.len());
    for rule in rules {
        match Regex::new(&rule.pattern) {
            Ok(regex) => compiled.push(CompiledRule {
                regex,
                pattern: rule.pattern.clone(),
                style_path: rule.style_path.clone(),
            }),
            Err(e) => {
                warn!("skipping rule with invalid pattern \"{}\": {}", rule.pattern, e);
                details.push(tr_fmt(
                    lang,
                    "regex_compile_failed",
                    &[("pattern", &rule.pattern), ("error", &e.to_string())],
                ));
            }
        }
    }
    compiled
}

/// Apply a config's rules to a set of layers, first match wins.
///
/// For each layer the rules are tried in declared order; the first rule whose
/// pattern matches anywhere in the layer name decides that layer's style and
/// no further rules are consulted for it, even when the apply then fails.
/// Not transactional: a failed layer is counted and reported while the rest
/// proceed. Re-running with the same inputs produces the same assignments.
pub fn apply_rules<L: Layer>(rules: &[StyleRule], layers: &mut [L], lang: Language) -> ApplyReport {
    let mut report = ApplyReport::default();

    if layers.is_empty() {
        report.details.push(tr(lang, "no_layers").to_string());
        return report;
    }

    let compiled = compile_rules(rules, lang, &mut report.details);
    if compiled.is_empty() {
        report.details.push(tr(lang, "no_valid_rules").to_string());
        return report;
    }

    for layer in layers.iter_mut() {
        let mut matched = false;

        for rule in &compiled {
            if !rule.regex.is_match(layer.name()) {
                continue;
            }
            matched = true;

            let style = Path::new(&rule.style_path);
            if !style.is_file() {
                warn!(
                    "layer \"{}\": style file missing: {}",
                    layer.name(),
                    rule.style_path
                );
                report.details.push(tr_fmt(
                    lang,
                    "style_file_not_exist",
                    &[("layer", layer.name()), ("file", &rule.style_path)],
                ));
                report.failed += 1;
                break;
            }

            match layer.apply_style(style) {
                Ok(()) => {
                    info!("layer \"{}\" styled by \"{}\"", layer.name(), rule.pattern);
                    report.details.push(tr_fmt(
                        lang,
                        "style_apply_success",
                        &[("layer", layer.name()), ("pattern", &rule.pattern)],
                    ));
                    report.styled += 1;
                }
                Err(e) => {
                    warn!("layer \"{}\": apply failed: {}", layer.name(), e);
                    report.details.push(tr_fmt(
                        lang,
                        "style_apply_failed",
                        &[
                            ("layer", layer.name()),
                            ("file", &rule.style_path),
                            ("error", &e.to_string()),
                        ],
                    ));
                    report.failed += 1;
                }
            }
            break;
        }

        if !matched {
            report
                .details
                .push(tr_fmt(lang, "layer_unmatched", &[("layer", layer.name())]));
            report.unmatched += 1;
        }
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::error::Result;
    use crate::app::project::FolderProject;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    /// In-memory layer recording which style was assigned.
    struct FakeLayer {
        name: String,
        assigned: Vec<PathBuf>,
    }

    impl FakeLayer {
        fn new(name: &str) -> Self {
            Self {
                name: name.to_string(),
                assigned: Vec::new(),
            }
        }
    }

    impl Layer for FakeLayer {
        fn name(&self) -> &str {
            &self.name
        }

        fn apply_style(&mut self, style: &Path) -> Result<()> {
            self.assigned.push(style.to_path_buf());
            Ok(())
        }
    }

    fn style_file(dir: &TempDir, name: &str) -> String {
        let path = dir.path().join(name);
        fs::write(&path, b"<qgis/>").unwrap();
        path.to_string_lossy().into_owned()
    }

    #[test]
    fn test_first_match_wins_single_style_per_layer() {
        let dir = TempDir::new().unwrap();
        let road = style_file(&dir, "road.qml");
        let all = style_file(&dir, "all.qml");

        let rules = vec![
            StyleRule::new("^road", &road),
            StyleRule::new(".*", &all),
        ];
        let mut layers = vec![FakeLayer::new("road_main"), FakeLayer::new("river")];

        let report = apply_rules(&rules, &mut layers, Language::English);

        assert_eq!(report.styled, 2);
        assert_eq!(report.failed, 0);
        assert_eq!(report.unmatched, 0);
        // Each layer received exactly one style, from its first matching rule.
        assert_eq!(layers[0].assigned, vec![PathBuf::from(&road)]);
        assert_eq!(layers[1].assigned, vec![PathBuf::from(&all)]);
    }

    #[test]
    fn test_prefix_pattern_matches_expected_layers() {
        let dir = TempDir::new().unwrap();
        let road = style_file(&dir, "road.qml");

        let rules = vec![StyleRule::new("^road.*", &road)];
        let mut layers = vec![
            FakeLayer::new("road_main"),
            FakeLayer::new("roads"),
            FakeLayer::new("highway"),
        ];

        let report = apply_rules(&rules, &mut layers, Language::English);

        assert_eq!(report.styled, 2);
        assert_eq!(report.unmatched, 1);
        assert_eq!(layers[0].assigned.len(), 1);
        assert_eq!(layers[1].assigned.len(), 1);
        assert!(layers[2].assigned.is_empty());
    }

    #[test]
    fn test_unanchored_search_semantics() {
        let dir = TempDir::new().unwrap();
        let road = style_file(&dir, "road.qml");

        let rules = vec![StyleRule::new("road", &road)];
        let mut layers = vec![FakeLayer::new("main_road_1")];

        let report = apply_rules(&rules, &mut layers, Language::English);
        assert_eq!(report.styled, 1);
    }

    #[test]
    fn test_invalid_pattern_skipped_others_still_apply() {
        let dir = TempDir::new().unwrap();
        let water = style_file(&dir, "water.qml");

        let rules = vec![
            StyleRule::new("^water[", &water), // does not compile
            StyleRule::new("^water", &water),
        ];
        let mut layers = vec![FakeLayer::new("water_bodies")];

        let report = apply_rules(&rules, &mut layers, Language::English);

        assert_eq!(report.styled, 1);
        assert!(report
            .details
            .iter()
            .any(|d| d.contains("^water[")));
    }

    #[test]
    fn test_all_rules_invalid_reports_no_valid_rules() {
        let rules = vec![StyleRule::new("[", "a.qml"), StyleRule::new("(", "b.qml")];
        let mut layers = vec![FakeLayer::new("anything")];

        let report = apply_rules(&rules, &mut layers, Language::English);

        assert_eq!(report.styled + report.failed + report.unmatched, 0);
        assert!(report
            .details
            .contains(&tr(Language::English, "no_valid_rules").to_string()));
    }

    #[test]
    fn test_missing_style_file_counts_failed_and_stops_rule_search() {
        let dir = TempDir::new().unwrap();
        let fallback = style_file(&dir, "fallback.qml");

        // First rule matches but its style file is gone; the fallback rule
        // must not be consulted for that layer.
        let rules = vec![
            StyleRule::new("^road", "/definitely/not/here.qml"),
            StyleRule::new(".*", &fallback),
        ];
        let mut layers = vec![FakeLayer::new("road_main")];

        let report = apply_rules(&rules, &mut layers, Language::English);

        assert_eq!(report.failed, 1);
        assert_eq!(report.styled, 0);
        assert!(layers[0].assigned.is_empty());
    }

    #[test]
    fn test_empty_layer_set_reports_no_layers() {
        let mut layers: Vec<FakeLayer> = Vec::new();
        let report = apply_rules(
            &[StyleRule::new(".*", "x.qml")],
            &mut layers,
            Language::English,
        );
        assert!(report
            .details
            .contains(&tr(Language::English, "no_layers").to_string()));
    }

    #[test]
    fn test_apply_is_idempotent_on_folder_project() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("road_main.shp"), b"data").unwrap();
        fs::write(dir.path().join("rivers.geojson"), b"data").unwrap();
        let road = style_file(&dir, "road.qml");

        let rules = vec![StyleRule::new("^road", &road)];

        let run = |expect_same: &mut Vec<Vec<u8>>| {
            let mut project = FolderProject::scan(dir.path()).unwrap();
            let report = apply_rules(&rules, project.layers_mut(), Language::English);
            assert_eq!(report.styled, 1);
            assert_eq!(report.unmatched, 1);
            let sidecar = fs::read(dir.path().join("road_main.qml")).unwrap();
            expect_same.push(sidecar);
        };

        let mut outcomes = Vec::new();
        run(&mut outcomes);
        run(&mut outcomes);
        assert_eq!(outcomes[0], outcomes[1]);
        // The unmatched layer never gained a sidecar.
        assert!(!dir.path().join("rivers.qml").exists());
    }

    #[test]
    fn test_details_localized() {
        let rules = vec![StyleRule::new("^x", "x.qml")];
        let mut layers = vec![FakeLayer::new("other")];

        let report = apply_rules(&rules, &mut layers, Language::Chinese);
        assert!(report.details[0].contains("未匹配"));
    }
}
