use tracing::debug;

use crate::structures::ScheduleError;

/// Minimum number of platforms needed so that no arriving train has to wait.
///
/// Both lists are sorted independently: only the sets of arrival and
/// departure instants matter for the overlap count, not which departure
/// belongs to which arrival. When a train arrives at the exact minute another
/// one leaves, the leaving train frees its platform first.
///
/// The input slices are left untouched. An empty schedule needs no platform.
pub fn min_platforms(arrival: &[i32], departure: &[i32]) -> Result<usize, ScheduleError> {
    if arrival.len() != departure.len() {
        return Err(ScheduleError::LengthMismatch {
            arrivals: arrival.len(),
            departures: departure.len(),
        });
    }
    Ok(peak_platforms(arrival, departure))
}

/// Sweep over a schedule whose lists have the same length.
pub(crate) fn peak_platforms(arrival: &[i32], departure: &[i32]) -> usize {
    if arrival.is_empty() {
        return 0;
    }

    let mut arrival = arrival.to_vec();
    let mut departure = departure.to_vec();
    arrival.sort_unstable();
    departure.sort_unstable();

    // The first arrival always takes platform 1. `current` may dip below zero
    // when trains arrive and leave in the same minute.
    let mut current: isize = 1;
    let mut peak: isize = 1;
    let mut i = 1;
    let mut j = 0;

    while i < arrival.len() && j < departure.len() {
        if arrival[i] < departure[j] {
            current += 1;
            i += 1;
            peak = peak.max(current);
        } else {
            current -= 1;
            j += 1;
        }
    }

    debug!("{} trains need {} platforms", arrival.len(), peak);
    peak as usize
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_six_trains_need_three_platforms() {
        let arrival = [900, 940, 950, 1100, 1500, 1800];
        let departure = [910, 1200, 1120, 1130, 1900, 2000];

        assert_eq!(min_platforms(&arrival, &departure), Ok(3));
    }

    #[test]
    fn test_departure_frees_platform_on_tie() {
        let arrival = [200, 210, 300, 320, 350, 500];
        let departure = [230, 340, 320, 430, 400, 520];

        assert_eq!(min_platforms(&arrival, &departure), Ok(2));
    }

    #[test]
    fn test_single_tie_does_not_add_platform() {
        assert_eq!(min_platforms(&[1000, 1100], &[1100, 1200]), Ok(1));
        assert_eq!(min_platforms(&[1000, 1059], &[1100, 1200]), Ok(2));
    }

    #[test]
    fn test_zero_length_stays() {
        assert_eq!(min_platforms(&[100, 100, 100], &[100, 100, 100]), Ok(1));
    }

    #[test]
    fn test_empty_schedule_needs_no_platform() {
        assert_eq!(min_platforms(&[], &[]), Ok(0));
    }

    #[test]
    fn test_single_train() {
        assert_eq!(min_platforms(&[1200], &[1230]), Ok(1));
    }

    #[test]
    fn test_mismatched_lengths() {
        assert_eq!(
            min_platforms(&[900, 1000], &[930]),
            Err(ScheduleError::LengthMismatch {
                arrivals: 2,
                departures: 1
            })
        );
    }

    #[test]
    fn test_inputs_are_not_sorted_in_place() {
        let arrival = vec![950, 900, 940];
        let departure = vec![1120, 910, 1200];

        let _ = min_platforms(&arrival, &departure);

        assert_eq!(arrival, vec![950, 900, 940]);
        assert_eq!(departure, vec![1120, 910, 1200]);
    }
}
