use crate::models::{Contributions, ContributionCalendar, DayActivity, DayCell, MonthLabel, Week};
use chrono::{Datelike, Duration, NaiveDate};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

const MAX_LEVEL: u8 = 4;
const MIN_LABEL_GAP: usize = 3;

/// Which year of contributions to show: the trailing 365 days or a calendar year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum YearSelector {
    #[default]
    Last,
    Year(i32),
}

impl YearSelector {
    /// Key of the matching entry in the API's `total` object.
    pub fn total_key(&self) -> String {
        match self {
            YearSelector::Last => "lastYear".to_string(),
            YearSelector::Year(year) => year.to_string(),
        }
    }
}

impl fmt::Display for YearSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            YearSelector::Last => f.write_str("last"),
            YearSelector::Year(year) => write!(f, "{year}"),
        }
    }
}

impl FromStr for YearSelector {
    type Err = String;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if value == "last" {
            return Ok(YearSelector::Last);
        }
        if value.len() == 4 && value.chars().all(|ch| ch.is_ascii_digit()) {
            if let Ok(year) = value.parse::<i32>() {
                return Ok(YearSelector::Year(year));
            }
        }
        Err(format!("year must be 'last' or a 4-digit year, got '{value}'"))
    }
}

/// Date range to render, never extending past `today`.
pub fn calendar_window(today: NaiveDate, selector: YearSelector) -> (NaiveDate, NaiveDate) {
    match selector {
        YearSelector::Last => (today - Duration::days(364), today),
        YearSelector::Year(year) => {
            let first = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(today);
            let last = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(today);
            (first, last.min(today))
        }
    }
}

pub fn build_calendar(
    today: NaiveDate,
    selector: YearSelector,
    contributions: &Contributions,
) -> ContributionCalendar {
    let (start, end) = calendar_window(today, selector);
    let activity: BTreeMap<NaiveDate, DayActivity> = contributions
        .days
        .iter()
        .map(|day| (day.date, *day))
        .collect();

    let weeks = build_weeks(start, end, &activity);
    let months = month_labels(&weeks);

    ContributionCalendar {
        total: contributions.total,
        weeks,
        months,
    }
}

/// Calendar worth showing, or `None` when the API reported no days at all.
pub fn visible_calendar(
    today: NaiveDate,
    selector: YearSelector,
    contributions: &Contributions,
) -> Option<ContributionCalendar> {
    if contributions.days.is_empty() {
        return None;
    }
    Some(build_calendar(today, selector, contributions))
}

/// Lays out `[start, end]` as Sunday-first weeks. The first week starts on the
/// Sunday on or before `start`; slots after `end` are `None`. Returns no weeks
/// when `start > end`.
pub fn build_weeks(
    start: NaiveDate,
    end: NaiveDate,
    activity: &BTreeMap<NaiveDate, DayActivity>,
) -> Vec<Week> {
    if start > end {
        return Vec::new();
    }

    let mut weeks = Vec::new();
    let mut current = week_start(start);

    while current <= end {
        let mut week: Week = [None; 7];
        for slot in week.iter_mut() {
            if current <= end {
                *slot = Some(day_cell(current, activity.get(&current)));
            }
            current += Duration::days(1);
        }
        weeks.push(week);
    }

    weeks
}

pub fn month_labels(weeks: &[Week]) -> Vec<MonthLabel> {
    let mut labels: Vec<MonthLabel> = Vec::new();
    let mut last: Option<(u32, usize)> = None;

    for (column, week) in weeks.iter().enumerate() {
        let Some(first) = week.iter().flatten().next() else {
            continue;
        };
        let month = first.date.month();
        let emit = match last {
            None => true,
            Some((last_month, last_column)) => {
                month != last_month && column - last_column >= MIN_LABEL_GAP
            }
        };
        if emit {
            labels.push(MonthLabel {
                label: first.date.format("%b").to_string(),
                column,
            });
            last = Some((month, column));
        }
    }

    labels
}

pub fn week_start(date: NaiveDate) -> NaiveDate {
    date - Duration::days(date.weekday().num_days_from_sunday() as i64)
}

fn day_cell(date: NaiveDate, activity: Option<&DayActivity>) -> DayCell {
    match activity {
        Some(day) => DayCell {
            date,
            count: day.count,
            level: day.level.min(MAX_LEVEL),
        },
        None => DayCell {
            date,
            count: 0,
            level: 0,
        },
    }
}
