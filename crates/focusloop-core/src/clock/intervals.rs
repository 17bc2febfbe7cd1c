use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// The four interval parameters of a run.
///
/// Doubles as the `[intervals]` section of the configuration file, so every
/// field carries a serde default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Intervals {
    #[serde(default = "default_work_minutes")]
    pub work_minutes: u32,
    #[serde(default = "default_short_break_minutes")]
    pub short_break_minutes: u32,
    #[serde(default = "default_long_break_minutes")]
    pub long_break_minutes: u32,
    #[serde(default = "default_sets_until_long_break")]
    pub sets_until_long_break: u32,
}

fn default_work_minutes() -> u32 {
    25
}
fn default_short_break_minutes() -> u32 {
    5
}
fn default_long_break_minutes() -> u32 {
    15
}
fn default_sets_until_long_break() -> u32 {
    4
}

impl Default for Intervals {
    fn default() -> Self {
        Self {
            work_minutes: default_work_minutes(),
            short_break_minutes: default_short_break_minutes(),
            long_break_minutes: default_long_break_minutes(),
            sets_until_long_break: default_sets_until_long_break(),
        }
    }
}

impl Intervals {
    /// All four parameters must be positive.
    ///
    /// # Errors
    ///
    /// Returns `ValidationError::InvalidValue` naming the offending field.
    pub fn validate(&self) -> Result<(), ValidationError> {
        let minutes = [
            ("work_minutes", self.work_minutes),
            ("short_break_minutes", self.short_break_minutes),
            ("long_break_minutes", self.long_break_minutes),
        ];
        for (field, value) in minutes {
            if value == 0 {
                return Err(ValidationError::InvalidValue {
                    field: field.into(),
                    message: "must be a positive number of minutes".into(),
                });
            }
        }
        if self.sets_until_long_break == 0 {
            return Err(ValidationError::InvalidValue {
                field: "sets_until_long_break".into(),
                message: "must be at least 1".into(),
            });
        }
        Ok(())
    }

    /// Minutes in one full cycle: every work set, the short breaks between
    /// them, and the closing long break.
    pub fn cycle_minutes(&self) -> u32 {
        self.sets_until_long_break * self.work_minutes
            + self.sets_until_long_break.saturating_sub(1) * self.short_break_minutes
            + self.long_break_minutes
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_intervals() {
        let iv = Intervals::default();
        assert_eq!(iv.work_minutes, 25);
        assert_eq!(iv.short_break_minutes, 5);
        assert_eq!(iv.long_break_minutes, 15);
        assert_eq!(iv.sets_until_long_break, 4);
        assert!(iv.validate().is_ok());
    }

    #[test]
    fn zero_minutes_rejected() {
        let iv = Intervals {
            short_break_minutes: 0,
            ..Intervals::default()
        };
        let err = iv.validate().unwrap_err();
        assert!(err.to_string().contains("short_break_minutes"));
    }

    #[test]
    fn zero_sets_rejected() {
        let iv = Intervals {
            sets_until_long_break: 0,
            ..Intervals::default()
        };
        assert!(iv.validate().is_err());
    }

    #[test]
    fn cycle_minutes_default() {
        // 4x25 work + 3x5 short + 15 long
        assert_eq!(Intervals::default().cycle_minutes(), 130);
    }

    #[test]
    fn cycle_minutes_single_set_has_no_short_breaks() {
        let iv = Intervals {
            work_minutes: 10,
            short_break_minutes: 3,
            long_break_minutes: 7,
            sets_until_long_break: 1,
        };
        assert_eq!(iv.cycle_minutes(), 17);
    }
}
