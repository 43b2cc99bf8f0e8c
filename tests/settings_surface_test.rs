//! Behavior tests for the settings surface.
//!
//! Covers field seeding, strict numeric validation, the display-flag
//! toggle, the explicit reset control, and the save-on-edit path.

use serde_json::{json, Value};
use std::cell::{Cell, RefCell};
use std::io;
use std::rc::Rc;
use vault_rpg::settings_tab::{self, FieldValue, SettingsEdit, SettingsError};
use vault_rpg::{Activity, ProgressSettings, ProgressionEngine, Scheduler, VaultHost};

#[derive(Default)]
struct FakeHostInner {
    file_count: Cell<usize>,
    persisted: RefCell<Option<Value>>,
    notices: RefCell<Vec<String>>,
    saves: RefCell<Vec<ProgressSettings>>,
}

#[derive(Clone, Default)]
struct FakeHost(Rc<FakeHostInner>);

impl VaultHost for FakeHost {
    fn file_count(&self) -> usize {
        self.0.file_count.get()
    }

    fn show_notice(&self, message: &str) {
        self.0.notices.borrow_mut().push(message.to_string());
    }

    fn set_status_text(&self, _text: &str) {}

    fn load_settings(&self) -> io::Result<Option<Value>> {
        Ok(self.0.persisted.borrow().clone())
    }

    fn save_settings(&self, settings: &ProgressSettings) -> io::Result<()> {
        self.0.saves.borrow_mut().push(settings.clone());
        Ok(())
    }
}

struct NullScheduler;

impl Scheduler for NullScheduler {
    fn schedule_repeating(&mut self, _interval: std::time::Duration, _activity: Activity) {}
}

fn started_engine(persisted: Option<Value>) -> (ProgressionEngine<FakeHost>, FakeHost) {
    let host = FakeHost::default();
    *host.0.persisted.borrow_mut() = persisted;
    let mut engine = ProgressionEngine::new(host.clone());
    engine.start(&mut NullScheduler);
    (engine, host)
}

#[test]
fn test_fields_are_seeded_from_current_values() {
    let (engine, _host) = started_engine(Some(json!({
        "xpPerSecond": 9,
        "xpPerFile": 25,
        "displayStaringTimeAsHumanString": false
    })));

    let fields = settings_tab::fields(&engine);

    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0].name, "XP gained per second");
    assert_eq!(fields[0].value, FieldValue::Text("9".to_string()));
    assert_eq!(fields[1].name, "XP gained per file");
    assert_eq!(fields[1].value, FieldValue::Text("25".to_string()));
    assert_eq!(fields[2].value, FieldValue::Toggle(false));
    assert_eq!(fields[3].name, "Reset XP and level");
    assert_eq!(fields[3].value, FieldValue::Button);
}

#[test]
fn test_numeric_edits_update_and_save() {
    let (mut engine, host) = started_engine(None);

    settings_tab::apply(&mut engine, SettingsEdit::XpPerSecond("5".to_string())).unwrap();
    settings_tab::apply(&mut engine, SettingsEdit::XpPerFile("10".to_string())).unwrap();

    assert_eq!(engine.settings().xp_per_second, 5);
    assert_eq!(engine.settings().xp_per_file, 10);
    assert_eq!(host.0.saves.borrow().len(), 2);
    assert_eq!(host.0.saves.borrow().last().unwrap().xp_per_file, 10);
}

#[test]
fn test_invalid_input_is_rejected_and_value_untouched() {
    let (mut engine, host) = started_engine(None);

    let err =
        settings_tab::apply(&mut engine, SettingsEdit::XpPerSecond("fast".to_string())).unwrap_err();

    assert_eq!(
        err,
        SettingsError::InvalidNumber {
            field: "XP gained per second",
            input: "fast".to_string(),
        }
    );
    assert_eq!(engine.settings().xp_per_second, 1);
    assert!(host.0.saves.borrow().is_empty());
}

#[test]
fn test_negative_input_is_rejected() {
    let (mut engine, _host) = started_engine(None);

    let result = settings_tab::apply(&mut engine, SettingsEdit::XpPerFile("-3".to_string()));

    assert!(result.is_err());
    assert_eq!(engine.settings().xp_per_file, 50);
}

#[test]
fn test_display_toggle_no_longer_resets_progress() {
    let (mut engine, host) = started_engine(Some(json!({ "xp": 700, "level": 2 })));

    settings_tab::apply(&mut engine, SettingsEdit::DisplaySessionTime(false)).unwrap();

    assert_eq!(engine.settings().xp, 700);
    assert_eq!(engine.settings().level, 2);
    assert!(!engine.settings().display_session_time_as_human);
    assert_eq!(host.0.saves.borrow().len(), 1);
}

#[test]
fn test_reset_control_zeroes_xp_and_level() {
    let (mut engine, host) = started_engine(Some(json!({ "xp": 700, "level": 2 })));

    settings_tab::apply(&mut engine, SettingsEdit::ResetProgress).unwrap();

    assert_eq!(engine.settings().xp, 0);
    assert_eq!(engine.settings().level, 1);
    assert_eq!(host.0.saves.borrow().len(), 1);
}

#[test]
fn test_lowering_xp_per_file_to_zero_keeps_level_when_accrued_xp_covers_it() {
    let (mut engine, host) = started_engine(Some(json!({ "xp": 600, "level": 2 })));
    host.0.file_count.set(4);

    settings_tab::apply(&mut engine, SettingsEdit::XpPerFile("0".to_string())).unwrap();
    engine.refresh_stats();

    assert_eq!(engine.settings().level, 2);
    assert!(host.0.notices.borrow().is_empty());
}

#[test]
fn test_session_duration_text_honors_display_flag() {
    let (mut engine, _host) = started_engine(None);
    for _ in 0..65 {
        engine.tick();
    }

    assert_eq!(engine.session_duration_text(), "0h 01m 05s");

    settings_tab::apply(&mut engine, SettingsEdit::DisplaySessionTime(false)).unwrap();
    assert_eq!(engine.session_duration_text(), "65000 ms");
}
