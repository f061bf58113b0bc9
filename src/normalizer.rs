// ABOUTME: Windowing and amplitude normalization of raw contribution calendars
// ABOUTME: Produces a fixed 360-day, oldest-to-newest sequence scaled into [0, 10]
//
// SPDX-License-Identifier: MIT OR Apache-2.0

use crate::constants::limits::{MAX_INTENSITY, WINDOW_DAYS};
use crate::models::RawCalendar;

/// Normalize a raw weekly calendar into the fixed contribution window.
///
/// Walks weeks and days newest-first, collecting the most recent
/// [`WINDOW_DAYS`] counts and the maximum seen, pads with zeros when the
/// calendar is shorter than the window, then reverses so the result reads
/// oldest-to-newest and scales every count by `count / max * 10`.
///
/// The padding zeros represent "no data yet" and land at the oldest end
/// of the window after the reversal. A calendar with no contributions at
/// all (max of zero) normalizes to all zeros rather than dividing by zero.
///
/// The output length is always exactly [`WINDOW_DAYS`] and every value is
/// in `[0, 10]`.
#[must_use]
#[allow(clippy::cast_precision_loss)] // counts are small per-day totals
pub fn normalize(calendar: &RawCalendar) -> Vec<f32> {
    let mut collected: Vec<u32> = Vec::with_capacity(WINDOW_DAYS);
    let mut max_count: u32 = 0;

    'walk: for week in calendar.weeks.iter().rev() {
        for day in week.days.iter().rev() {
            if collected.len() >= WINDOW_DAYS {
                break 'walk;
            }
            collected.push(day.count);
            max_count = max_count.max(day.count);
        }
    }

    collected.resize(WINDOW_DAYS, 0);
    collected.reverse();

    if max_count == 0 {
        return vec![0.0; WINDOW_DAYS];
    }

    collected
        .into_iter()
        .map(|count| count as f32 / max_count as f32 * MAX_INTENSITY)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn short_calendar_is_left_padded() {
        let calendar = RawCalendar::from_counts(&[&[3, 6]]);
        let sequence = normalize(&calendar);

        assert_eq!(sequence.len(), WINDOW_DAYS);
        assert!(sequence[..WINDOW_DAYS - 2].iter().all(|&v| v == 0.0));
        assert_eq!(sequence[WINDOW_DAYS - 2], 5.0);
        assert_eq!(sequence[WINDOW_DAYS - 1], 10.0);
    }

    #[test]
    fn oversized_calendar_keeps_only_the_most_recent_window() {
        // 60 weeks of 7 days = 420 days, 60 more than the window. The
        // loud oldest week must fall entirely outside the window.
        let mut weeks: Vec<&[u32]> = vec![&[9, 9, 9, 9, 9, 9, 9]; 1];
        let quiet: &[u32] = &[0, 0, 0, 0, 0, 0, 1];
        weeks.extend(std::iter::repeat(quiet).take(59));
        let calendar = RawCalendar::from_counts(&weeks);

        let sequence = normalize(&calendar);
        assert_eq!(sequence.len(), WINDOW_DAYS);
        assert!(sequence.iter().all(|&v| v <= MAX_INTENSITY));
        // The loud first week (days 1..=7 of 420) was dropped entirely, so
        // the window max is 1 and the count-1 days scale to full intensity:
        // 51 whole quiet weeks plus the newest day of the 52nd.
        assert_eq!(
            sequence.iter().copied().fold(0.0_f32, f32::max),
            MAX_INTENSITY
        );
        assert_eq!(
            sequence.iter().filter(|&&v| v == MAX_INTENSITY).count(),
            52
        );
    }

    #[test]
    fn all_zero_calendar_normalizes_to_zero() {
        let week: &[u32] = &[0, 0, 0, 0, 0, 0, 0];
        let calendar = RawCalendar::from_counts(&[week; 3]);
        let sequence = normalize(&calendar);

        assert_eq!(sequence.len(), WINDOW_DAYS);
        assert!(sequence.iter().all(|&v| v == 0.0));
    }

    #[test]
    fn empty_calendar_normalizes_to_zero() {
        let sequence = normalize(&RawCalendar::default());
        assert_eq!(sequence, vec![0.0; WINDOW_DAYS]);
    }
}
