/// Zero-padded `HH:MM:SS` for the countdown display.
#[must_use]
pub fn format_hms(total_secs: u32) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{hours:02}:{minutes:02}:{seconds:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pads_every_field() {
        assert_eq!(format_hms(0), "00:00:00");
        assert_eq!(format_hms(5), "00:00:05");
        assert_eq!(format_hms(65), "00:01:05");
    }

    #[test]
    fn formats_exact_hours() {
        assert_eq!(format_hms(3_600), "01:00:00");
        assert_eq!(format_hms(10_800), "03:00:00");
    }

    #[test]
    fn formats_a_partially_elapsed_exam() {
        // 3-hour exam with one hour on the clock consumed per tick count.
        let remaining = 10_800 - 7_200;
        assert_eq!(format_hms(remaining), "01:00:00");
    }

    #[test]
    fn hours_can_exceed_two_digits_of_minutes() {
        assert_eq!(format_hms(4 * 3600 + 26 * 60 + 9), "04:26:09");
    }
}
