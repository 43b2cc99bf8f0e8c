//! The settings surface: field descriptors for the host's settings panel
//! and the edit-application path.
//!
//! Every accepted edit mutates the shared record through an engine setter,
//! which also triggers the engine's save path. Numeric input is parsed
//! strictly; rejected input leaves the stored value untouched and surfaces
//! a [`SettingsError`] for the form to display.

use crate::engine::ProgressionEngine;
use crate::host::VaultHost;
use thiserror::Error;

pub const XP_PER_SECOND_FIELD: &str = "XP gained per second";
pub const XP_PER_FILE_FIELD: &str = "XP gained per file";
pub const DISPLAY_SESSION_TIME_FIELD: &str = "Show session time as text";
pub const RESET_FIELD: &str = "Reset XP and level";

/// Current value of a settings field, used to seed the host's widgets.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    /// A text-entry field.
    Text(String),
    /// An on/off toggle.
    Toggle(bool),
    /// A plain action button.
    Button,
}

/// One field descriptor handed to the host's settings renderer.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub desc: &'static str,
    pub value: FieldValue,
}

/// An edit coming back from the host's settings panel.
#[derive(Debug, Clone, PartialEq)]
pub enum SettingsEdit {
    XpPerSecond(String),
    XpPerFile(String),
    DisplaySessionTime(bool),
    ResetProgress,
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum SettingsError {
    #[error("{field} must be a whole number, got {input:?}")]
    InvalidNumber { field: &'static str, input: String },
}

/// The settings fields in display order, seeded with current values.
pub fn fields<H: VaultHost>(engine: &ProgressionEngine<H>) -> Vec<FieldSpec> {
    let settings = engine.settings();
    vec![
        FieldSpec {
            name: XP_PER_SECOND_FIELD,
            desc: "Set the amount of XP gained for each second spent in the vault.",
            value: FieldValue::Text(settings.xp_per_second.to_string()),
        },
        FieldSpec {
            name: XP_PER_FILE_FIELD,
            desc: "Set the amount of XP gained for each file in the vault.",
            value: FieldValue::Text(settings.xp_per_file.to_string()),
        },
        FieldSpec {
            name: DISPLAY_SESSION_TIME_FIELD,
            desc: "Show the current session duration as a human-readable string.",
            value: FieldValue::Toggle(settings.display_session_time_as_human),
        },
        FieldSpec {
            name: RESET_FIELD,
            desc: "WARNING: Resets your XP and level.",
            value: FieldValue::Button,
        },
    ]
}

/// Applies one edit from the settings panel.
pub fn apply<H: VaultHost>(
    engine: &mut ProgressionEngine<H>,
    edit: SettingsEdit,
) -> Result<(), SettingsError> {
    match edit {
        SettingsEdit::XpPerSecond(input) => {
            engine.set_xp_per_second(parse_field(XP_PER_SECOND_FIELD, &input)?);
        }
        SettingsEdit::XpPerFile(input) => {
            engine.set_xp_per_file(parse_field(XP_PER_FILE_FIELD, &input)?);
        }
        SettingsEdit::DisplaySessionTime(value) => {
            engine.set_display_session_time(value);
        }
        SettingsEdit::ResetProgress => {
            engine.reset_progress();
        }
    }
    Ok(())
}

fn parse_field(field: &'static str, input: &str) -> Result<u32, SettingsError> {
    input
        .trim()
        .parse()
        .map_err(|_| SettingsError::InvalidNumber {
            field,
            input: input.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_field_accepts_whole_numbers() {
        assert_eq!(parse_field(XP_PER_SECOND_FIELD, "5"), Ok(5));
        assert_eq!(parse_field(XP_PER_SECOND_FIELD, " 12 "), Ok(12));
        assert_eq!(parse_field(XP_PER_SECOND_FIELD, "0"), Ok(0));
    }

    #[test]
    fn test_parse_field_rejects_bad_input() {
        for input in ["", "abc", "1.5", "-3", "1e3"] {
            let err = parse_field(XP_PER_FILE_FIELD, input).unwrap_err();
            assert_eq!(
                err,
                SettingsError::InvalidNumber {
                    field: XP_PER_FILE_FIELD,
                    input: input.to_string(),
                }
            );
        }
    }

    #[test]
    fn test_error_display_names_the_field() {
        let err = SettingsError::InvalidNumber {
            field: XP_PER_SECOND_FIELD,
            input: "abc".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "XP gained per second must be a whole number, got \"abc\""
        );
    }
}
