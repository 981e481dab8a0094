//! Display-string generation: the clock face text for a given instant.

use std::fmt::Write as _;

use chrono::{DateTime, Local, Timelike};
use murmur_config::PhaseSchedule;
use murmur_core::TimeFormat;

/// Render the string shown for `when`: either a scheduled label or the
/// zero-padded clock. The same function feeds both the current and the next
/// second, so label windows morph in and out like any digit change.
pub fn display_string(when: DateTime<Local>, format: TimeFormat, phases: &PhaseSchedule) -> String {
    if let Some(label) = phases.label_at(when.second()) {
        // A label with a bad format specifier shows as-is instead of
        // erroring mid-frame.
        let mut out = String::new();
        if write!(out, "{}", when.format(label)).is_ok() {
            return out;
        }
        return label.to_string();
    }
    let pattern = match format {
        TimeFormat::TwentyFourHour => "%H:%M:%S",
        TimeFormat::TwelveHour => "%I:%M:%S",
    };
    when.format(pattern).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use murmur_config::PhaseWindow;

    fn at(h: u32, m: u32, s: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2021, 2, 7, h, m, s).unwrap()
    }

    #[test]
    fn clock_strings_are_zero_padded() {
        let phases = PhaseSchedule::default();
        assert_eq!(
            display_string(at(9, 5, 3), TimeFormat::TwentyFourHour, &phases),
            "09:05:03"
        );
        assert_eq!(
            display_string(at(0, 0, 0), TimeFormat::TwentyFourHour, &phases),
            "00:00:00"
        );
    }

    #[test]
    fn twelve_hour_format_wraps_the_hour() {
        let phases = PhaseSchedule::default();
        assert_eq!(
            display_string(at(13, 30, 0), TimeFormat::TwelveHour, &phases),
            "01:30:00"
        );
    }

    #[test]
    fn scheduled_windows_replace_the_clock() {
        let phases = PhaseSchedule {
            cycle: 20,
            windows: vec![
                PhaseWindow {
                    label: "%A".into(),
                    from: 1,
                    until: 2,
                },
                PhaseWindow {
                    label: "%b %-d".into(),
                    from: 3,
                    until: 4,
                },
            ],
        };
        // 2021-02-07 was a Sunday.
        assert_eq!(
            display_string(at(12, 0, 21), TimeFormat::TwentyFourHour, &phases),
            "Sunday"
        );
        assert_eq!(
            display_string(at(12, 0, 23), TimeFormat::TwentyFourHour, &phases),
            "Feb 7"
        );
        assert_eq!(
            display_string(at(12, 0, 25), TimeFormat::TwentyFourHour, &phases),
            "12:00:25"
        );
    }

    #[test]
    fn empty_schedule_always_shows_the_clock() {
        let phases = PhaseSchedule::default();
        for s in 0..60 {
            let text = display_string(at(23, 59, s), TimeFormat::TwentyFourHour, &phases);
            assert!(text.contains(':'), "{text}");
        }
    }
}
