//! Tide-extrema extraction from a water-height prediction series
//!
//! The engine does not predict tides; it only detects the turning points in
//! whatever time-ordered series it is given.

use chrono::{DateTime, Utc};
use zwemwater_shared::conditions::{TideEvent, TideInfo, TideSample, TideType};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Direction {
    None,
    Rising,
    Falling,
}

/// Detect high/low water events in `series` relative to `reference_time`
///
/// Fewer than 3 samples cannot contain an interior extremum and yield an
/// empty event list. A falling-to-rising flip emits a Low at the extreme held
/// before the flip; rising-to-falling emits a High. Equal consecutive heights
/// (a plateau) neither change direction nor advance the extreme tracker, so
/// flat stretches produce no spurious events while the true turning point is
/// still found once the plateau ends.
pub fn extract(series: &[TideSample], reference_time: DateTime<Utc>) -> TideInfo {
    if series.len() < 3 {
        return TideInfo::new(Vec::new(), reference_time);
    }

    let mut events = Vec::new();
    let mut direction = Direction::None;
    let mut extreme = series[0];

    for window in series.windows(2) {
        let (previous, current) = (window[0], window[1]);
        match current.height_cm.cmp(&previous.height_cm) {
            std::cmp::Ordering::Greater => {
                if direction == Direction::Falling {
                    events.push(TideEvent {
                        tide_type: TideType::Low,
                        time: extreme.time,
                        height_cm: extreme.height_cm,
                    });
                }
                direction = Direction::Rising;
                extreme = current;
            }
            std::cmp::Ordering::Less => {
                if direction == Direction::Rising {
                    events.push(TideEvent {
                        tide_type: TideType::High,
                        time: extreme.time,
                        height_cm: extreme.height_cm,
                    });
                }
                direction = Direction::Falling;
                extreme = current;
            }
            // Plateau: the extreme may still be part of the same extremum
            std::cmp::Ordering::Equal => {}
        }
    }

    TideInfo::new(events, reference_time)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn at(minute: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 6, 15, 6, minute, 0).unwrap()
    }

    fn series(heights: &[i32]) -> Vec<TideSample> {
        heights
            .iter()
            .enumerate()
            .map(|(i, &height_cm)| TideSample { time: at(i as u32), height_cm })
            .collect()
    }

    #[test]
    fn test_single_high_at_middle_sample() {
        let samples = series(&[100, 150, 120]);
        let info = extract(&samples, at(1));
        assert_eq!(info.events.len(), 1);
        let event = info.events[0];
        assert_eq!(event.tide_type, TideType::High);
        assert_eq!(event.time, at(1));
        assert_eq!(event.height_cm, 150);
    }

    #[test]
    fn test_fewer_than_three_samples_yields_no_events() {
        assert!(extract(&series(&[]), at(0)).events.is_empty());
        assert!(extract(&series(&[100]), at(0)).events.is_empty());
        assert!(extract(&series(&[100, 150]), at(0)).events.is_empty());
    }

    #[test]
    fn test_alternating_highs_and_lows() {
        let samples = series(&[0, 80, 120, 90, 20, -40, 10, 100]);
        let info = extract(&samples, at(0));
        assert_eq!(info.events.len(), 2);
        assert_eq!(info.events[0].tide_type, TideType::High);
        assert_eq!(info.events[0].height_cm, 120);
        assert_eq!(info.events[1].tide_type, TideType::Low);
        assert_eq!(info.events[1].height_cm, -40);
    }

    #[test]
    fn test_plateau_does_not_emit_spurious_events() {
        // Flat top: the high is the first sample of the plateau
        let samples = series(&[100, 150, 150, 150, 120]);
        let info = extract(&samples, at(0));
        assert_eq!(info.events.len(), 1);
        assert_eq!(info.events[0].tide_type, TideType::High);
        assert_eq!(info.events[0].time, at(1));
        assert_eq!(info.events[0].height_cm, 150);
    }

    #[test]
    fn test_plateau_mid_slope_is_ignored() {
        // Rising with a flat stretch, then a clean high
        let samples = series(&[100, 120, 120, 140, 110]);
        let info = extract(&samples, at(0));
        assert_eq!(info.events.len(), 1);
        assert_eq!(info.events[0].height_cm, 140);
    }

    #[test]
    fn test_monotonic_series_has_no_events() {
        assert!(extract(&series(&[0, 10, 20, 30]), at(0)).events.is_empty());
        assert!(extract(&series(&[30, 20, 10, 0]), at(0)).events.is_empty());
    }

    #[test]
    fn test_reference_time_is_carried_through() {
        let samples = series(&[100, 150, 120]);
        let info = extract(&samples, at(2));
        assert_eq!(info.reference_time, at(2));
        // Event at minute 1 is strictly before minute 2
        assert_eq!(info.previous_high().unwrap().height_cm, 150);
        assert!(info.next_high().is_none());
    }
}
