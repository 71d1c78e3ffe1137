use chrono::NaiveTime;
use thiserror::Error;

use crate::scheduling::peak_platforms;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScheduleError {
    #[error("{arrivals} arrivals but {departures} departures")]
    LengthMismatch { arrivals: usize, departures: usize },
}

/// Arrival and departure times of the trains calling at a station on one day.
///
/// Times are `hhmm` integers (930 is 9:30). Index `k` of both lists describes
/// the same train.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    arrivals: Vec<i32>,
    departures: Vec<i32>,
}

impl Schedule {
    pub fn new(arrivals: Vec<i32>, departures: Vec<i32>) -> Result<Schedule, ScheduleError> {
        if arrivals.len() != departures.len() {
            return Err(ScheduleError::LengthMismatch {
                arrivals: arrivals.len(),
                departures: departures.len(),
            });
        }
        Ok(Schedule {
            arrivals,
            departures,
        })
    }

    pub fn arrivals(&self) -> &[i32] {
        &self.arrivals
    }

    pub fn departures(&self) -> &[i32] {
        &self.departures
    }

    pub fn len(&self) -> usize {
        self.arrivals.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arrivals.is_empty()
    }

    pub fn min_platforms(&self) -> usize {
        peak_platforms(&self.arrivals, &self.departures)
    }
}

/// Wall-clock time of an `hhmm` integer, if it is one.
pub fn hhmm_to_time(hhmm: i32) -> Option<NaiveTime> {
    if hhmm < 0 {
        return None;
    }
    NaiveTime::from_hms_opt((hhmm / 100) as u32, (hhmm % 100) as u32, 0)
}
