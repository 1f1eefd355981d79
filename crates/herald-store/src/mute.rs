// SPDX-FileCopyrightText: 2026 Herald Contributors
// SPDX-License-Identifier: MIT OR Apache-2.0

//! Mute durations and their expiry timestamps.

use chrono::{DateTime, Duration, LocalResult, NaiveTime, TimeZone, Utc};
use herald_core::HeraldError;

/// How long a mute lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MuteDuration {
    /// A fixed number of minutes from now.
    Minutes(u32),
    /// Until the configured morning hour on the next calendar day.
    UntilTomorrowMorning,
}

impl MuteDuration {
    /// The choices offered to users, in display order.
    pub const PRESETS: [MuteDuration; 4] = [
        MuteDuration::Minutes(30),
        MuteDuration::Minutes(60),
        MuteDuration::Minutes(240),
        MuteDuration::UntilTomorrowMorning,
    ];

    pub fn label(&self) -> String {
        match self {
            MuteDuration::Minutes(60) => "1 hour".to_string(),
            MuteDuration::Minutes(m) if *m > 60 && m % 60 == 0 => format!("{} hours", m / 60),
            MuteDuration::Minutes(1) => "1 minute".to_string(),
            MuteDuration::Minutes(m) => format!("{m} minutes"),
            MuteDuration::UntilTomorrowMorning => "Until tomorrow morning".to_string(),
        }
    }

    /// Absolute expiry for a mute starting at `now`.
    ///
    /// `now` carries the time zone the "tomorrow morning" boundary is
    /// computed in; `morning_hour` is a local clock hour (0-23).
    pub fn expires_at<Tz: TimeZone>(
        &self,
        now: &DateTime<Tz>,
        morning_hour: u32,
    ) -> Result<DateTime<Utc>, HeraldError> {
        match self {
            MuteDuration::Minutes(m) => {
                Ok(now.with_timezone(&Utc) + Duration::minutes(i64::from(*m)))
            }
            MuteDuration::UntilTomorrowMorning => next_morning(now, morning_hour),
        }
    }
}

/// `hour:00` local time on the calendar day after `now`.
///
/// Always rolls to the next day, even when called before `hour` today. When
/// the local time does not exist (a DST gap) the clock rolls forward by an
/// hour, landing on the first valid instant after the gap; when it is
/// ambiguous the earlier instant wins.
pub fn next_morning<Tz: TimeZone>(
    now: &DateTime<Tz>,
    hour: u32,
) -> Result<DateTime<Utc>, HeraldError> {
    let time = NaiveTime::from_hms_opt(hour, 0, 0).ok_or_else(|| {
        HeraldError::validation("morning_hour", format!("{hour} is not a clock hour"))
    })?;
    let tomorrow = now
        .date_naive()
        .succ_opt()
        .ok_or_else(|| HeraldError::Internal("date overflow computing mute expiry".into()))?;
    let local = tomorrow.and_time(time);

    let tz = now.timezone();
    let resolved = match tz.from_local_datetime(&local) {
        LocalResult::Single(t) => t,
        LocalResult::Ambiguous(earliest, _) => earliest,
        LocalResult::None => tz
            .from_local_datetime(&(local + Duration::hours(1)))
            .earliest()
            .ok_or_else(|| {
                HeraldError::Internal(format!("no valid local time near {local}"))
            })?,
    };
    Ok(resolved.with_timezone(&Utc))
}
