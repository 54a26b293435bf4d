use chrono::{Datelike, Duration, Months, NaiveDate};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Kind of reporting period.
///
/// `Daily`, `Weekly`, and `Monthly` are anchored to a caller-supplied
/// reference date. `LastWeek`, `LastMonth`, and `LastQuarter` are trailing
/// windows anchored to the reporting "today".
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString, EnumIter,
)]
pub enum PeriodKind {
    Daily,
    Weekly,
    Monthly,
    LastWeek,
    LastMonth,
    LastQuarter,
}

/// An inclusive range of civil dates. Invariant: `start <= end`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl DateRange {
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }
}

impl PeriodKind {
    /// Resolves this period kind to an inclusive date range.
    ///
    /// `reference` anchors the calendar-aligned kinds; `today` anchors the
    /// trailing kinds and is passed in so that one reporting call observes a
    /// single "now". All arithmetic is on proleptic Gregorian civil dates
    /// with no timezone conversion.
    pub fn resolve(self, reference: NaiveDate, today: NaiveDate) -> DateRange {
        match self {
            PeriodKind::Daily => DateRange {
                start: reference,
                end: reference,
            },
            PeriodKind::Weekly => {
                // Next-or-same Sunday, then back to the Monday of that week.
                // A Sunday reference therefore ends its window on the
                // reference date itself.
                let to_sunday = 6 - i64::from(reference.weekday().num_days_from_monday());
                let end = reference + Duration::days(to_sunday);
                DateRange {
                    start: end - Duration::days(6),
                    end,
                }
            }
            PeriodKind::Monthly => {
                let start = reference.with_day(1).unwrap();
                let end = (start + Months::new(1)).pred_opt().unwrap();
                DateRange { start, end }
            }
            PeriodKind::LastWeek => DateRange {
                start: today - Duration::weeks(1),
                end: today,
            },
            PeriodKind::LastMonth => DateRange {
                start: today - Months::new(1),
                end: today,
            },
            PeriodKind::LastQuarter => DateRange {
                start: today - Months::new(3),
                end: today,
            },
        }
    }
}
