// Copyright © 2025 Akira Miyakoda
//
// This software is released under the MIT License.
// https://opensource.org/licenses/MIT

use chrono::{DateTime, Utc};
use serde::Serialize;
use suncalc::{MoonTimes, Times, Timestamp};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub(crate) struct Almanac {
    pub solar_noon: Option<DateTime<Utc>>,
    pub nadir: Option<DateTime<Utc>>,
    pub sunrise: Option<DateTime<Utc>>,
    pub sunset: Option<DateTime<Utc>>,
    pub sunrise_end: Option<DateTime<Utc>>,
    pub sunset_start: Option<DateTime<Utc>>,
    pub dawn: Option<DateTime<Utc>>,
    pub dusk: Option<DateTime<Utc>>,
    pub nautical_dawn: Option<DateTime<Utc>>,
    pub nautical_dusk: Option<DateTime<Utc>>,
    pub night_end: Option<DateTime<Utc>>,
    pub night: Option<DateTime<Utc>>,
    pub golden_hour_end: Option<DateTime<Utc>>,
    pub golden_hour: Option<DateTime<Utc>>,
    pub moon_rise: Option<DateTime<Utc>>,
    pub moon_set: Option<DateTime<Utc>>,
}

pub(crate) fn compute(date: DateTime<Utc>, latitude: f64, longitude: f64) -> Almanac {
    let timestamp = Timestamp(date.timestamp_millis());
    let sun = suncalc::get_times(timestamp, latitude, longitude, None);
    let moon = suncalc::get_moon_times(timestamp, latitude, longitude);

    Almanac::new(sun, moon)
}

impl Almanac {
    fn new(sun: Times, moon: MoonTimes) -> Self {
        Self {
            solar_noon: instant(sun.solar_noon),
            nadir: instant(sun.nadir),
            sunrise: instant(sun.sunrise),
            sunset: instant(sun.sunset),
            sunrise_end: instant(sun.sunrise_end),
            sunset_start: instant(sun.sunset_start),
            dawn: instant(sun.dawn),
            dusk: instant(sun.dusk),
            nautical_dawn: instant(sun.nautical_dawn),
            nautical_dusk: instant(sun.nautical_dusk),
            night_end: instant(sun.night_end),
            night: instant(sun.night),
            golden_hour_end: instant(sun.golden_hour_end),
            golden_hour: instant(sun.golden_hour),
            moon_rise: moon.rise.and_then(instant),
            moon_set: moon.set.and_then(instant),
        }
    }
}

// Events the library reports outside the representable range (e.g. twilight
// that never ends at polar latitudes) become explicit nulls.
fn instant(timestamp: Timestamp) -> Option<DateTime<Utc>> {
    DateTime::from_timestamp_millis(timestamp.0)
}
