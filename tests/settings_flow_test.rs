//! Headless settings-panel flows: claim coverage of the fallback section
//! and the write-through behavior of the dedicated runtime/memory editors,
//! checked against the file on disk.

use std::path::PathBuf;

use meteor::config::Config;
use meteor::gui::args_dialog::ArgsDialog;
use meteor::gui::settings::{EditorKind, SettingsCx, SettingsPanel, fallback_editors};
use meteor::gui::status_bar::StatusLine;
use meteor::lang::Lang;
use serde_json::json;
use tempfile::TempDir;

struct Harness {
    _temp: TempDir,
    config: Config,
    lang: Lang,
    status: StatusLine,
    args_dialog: ArgsDialog,
}

impl Harness {
    fn new() -> Self {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("launcher.json");
        let config = Config::load_or_default(&path).unwrap();
        Self {
            _temp: temp,
            config,
            lang: Lang::new("en"),
            status: StatusLine::default(),
            args_dialog: ArgsDialog::new("vm-args"),
        }
    }

    fn cx(&mut self) -> SettingsCx<'_> {
        SettingsCx {
            config: &mut self.config,
            lang: &self.lang,
            status: &mut self.status,
            args_dialog: &mut self.args_dialog,
        }
    }

    fn reload(&self) -> Config {
        Config::load(self.config.path()).unwrap()
    }
}

#[test]
fn test_fallback_section_covers_only_unclaimed_keys() {
    let mut h = Harness::new();
    h.config.set("custom-flag", true);
    h.config.set("announcement-url", "https://example.com/news");
    h.config.set("legacy-api", json!({ "api": "v2", "strict": false }));
    h.config.set("recent-files", json!(["a.jar"]));

    let panel = SettingsPanel::new(&h.config).unwrap();
    let editors = fallback_editors(h.config.root(), panel.claimed());

    let keys: Vec<&str> = editors
        .iter()
        .map(|e| e.path.last().unwrap().as_str())
        .collect();
    // every dedicated key is claimed, arrays get no editor, the nested
    // object shows up as one group
    assert_eq!(keys, vec!["custom-flag", "announcement-url", "legacy-api"]);

    let EditorKind::Group(children) = &editors[2].kind else {
        panic!("nested object must render as a group");
    };
    assert_eq!(children.len(), 2);
}

#[test]
fn test_fallback_toggle_round_trips_to_disk() {
    let mut h = Harness::new();
    h.config.set("custom-flag", true);
    let panel = SettingsPanel::new(&h.config).unwrap();

    let editors = fallback_editors(h.config.root(), panel.claimed());
    let flag = editors
        .iter()
        .find(|e| e.path == vec!["custom-flag".to_string()])
        .unwrap();
    assert_eq!(flag.kind, EditorKind::Toggle);

    // what the toggle's commit does
    h.config.set_path(&flag.path, false);
    h.config.commit().unwrap();

    assert_eq!(h.reload().get("custom-flag"), Some(&json!(false)));
}

#[test]
fn test_runtime_selection_persists_absolute_path() {
    let mut h = Harness::new();
    let mut panel = SettingsPanel::new(&h.config).unwrap();

    panel.apply_runtime_selection(&mut h.cx(), Some(PathBuf::from("/opt/jdk21/bin/java")));

    assert_eq!(h.reload().get_str("jre").unwrap(), "/opt/jdk21/bin/java");
    assert!(h.status.text().contains("/opt/jdk21/bin/java"));
}

#[test]
fn test_runtime_reset_persists_only_when_confirmed() {
    let mut h = Harness::new();
    let mut panel = SettingsPanel::new(&h.config).unwrap();
    panel.apply_runtime_selection(&mut h.cx(), Some(PathBuf::from("/opt/jdk21/bin/java")));

    panel.reset_runtime_override(&mut h.cx(), false);
    assert_eq!(h.reload().get_str("jre").unwrap(), "/opt/jdk21/bin/java");

    panel.reset_runtime_override(&mut h.cx(), true);
    assert_eq!(h.reload().get_str("jre").unwrap(), "");
}

#[test]
fn test_panel_construction_requires_dedicated_keys_on_disk() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("launcher.json");
    std::fs::write(&path, r#"{ "jre": "", "ram": 2048 }"#).unwrap();

    let config = Config::load(&path).unwrap();
    let err = SettingsPanel::new(&config).unwrap_err();
    assert!(err.to_string().contains("wrapper"));
}
