//! Recurrence Rules
//!
//! Structured representation of the RFC-5545-style rule strings the backend
//! stores for recurring chores. The same type serializes rules for the
//! create flow and parses stored rules for display, so the grammar lives in
//! exactly one place. Occurrence computation is backend-owned and
//! deliberately absent here.

use std::fmt;
use std::str::FromStr;

/// How often a recurring chore repeats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Frequency {
    Daily,
    #[default]
    Weekly,
    Monthly,
}

impl Frequency {
    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Daily => "DAILY",
            Frequency::Weekly => "WEEKLY",
            Frequency::Monthly => "MONTHLY",
        }
    }

    /// Singular unit for English descriptions ("day", "week", "month").
    pub fn unit(&self) -> &'static str {
        match self {
            Frequency::Daily => "day",
            Frequency::Weekly => "week",
            Frequency::Monthly => "month",
        }
    }
}

impl FromStr for Frequency {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "DAILY" => Ok(Frequency::Daily),
            "WEEKLY" => Ok(Frequency::Weekly),
            "MONTHLY" => Ok(Frequency::Monthly),
            other => Err(RuleParseError::UnknownFrequency(other.to_string())),
        }
    }
}

/// Day-of-week codes used in BYDAY sets.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Weekday {
    Mo,
    Tu,
    We,
    Th,
    Fr,
    Sa,
    Su,
}

impl Weekday {
    /// All days in BYDAY display order, Monday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Mo,
        Weekday::Tu,
        Weekday::We,
        Weekday::Th,
        Weekday::Fr,
        Weekday::Sa,
        Weekday::Su,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Weekday::Mo => "MO",
            Weekday::Tu => "TU",
            Weekday::We => "WE",
            Weekday::Th => "TH",
            Weekday::Fr => "FR",
            Weekday::Sa => "SA",
            Weekday::Su => "SU",
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Mo => "Monday",
            Weekday::Tu => "Tuesday",
            Weekday::We => "Wednesday",
            Weekday::Th => "Thursday",
            Weekday::Fr => "Friday",
            Weekday::Sa => "Saturday",
            Weekday::Su => "Sunday",
        }
    }
}

impl FromStr for Weekday {
    type Err = RuleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "MO" => Ok(Weekday::Mo),
            "TU" => Ok(Weekday::Tu),
            "WE" => Ok(Weekday::We),
            "TH" => Ok(Weekday::Th),
            "FR" => Ok(Weekday::Fr),
            "SA" => Ok(Weekday::Sa),
            "SU" => Ok(Weekday::Su),
            other => Err(RuleParseError::UnknownDay(other.to_string())),
        }
    }
}

/// Why a stored rule string could not be understood.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RuleParseError {
    MissingFrequency,
    UnknownFrequency(String),
    UnknownDay(String),
    BadInterval(String),
}

impl fmt::Display for RuleParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RuleParseError::MissingFrequency => write!(f, "rule has no FREQ part"),
            RuleParseError::UnknownFrequency(v) => write!(f, "unknown frequency '{}'", v),
            RuleParseError::UnknownDay(v) => write!(f, "unknown day code '{}'", v),
            RuleParseError::BadInterval(v) => write!(f, "invalid interval '{}'", v),
        }
    }
}

/// A recurrence schedule: frequency, interval, and an optional by-day set.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RecurrenceRule {
    pub frequency: Frequency,
    pub interval: u32,
    pub by_day: Vec<Weekday>,
}

impl Default for RecurrenceRule {
    fn default() -> Self {
        Self {
            frequency: Frequency::default(),
            interval: 1,
            by_day: Vec::new(),
        }
    }
}

impl RecurrenceRule {
    pub fn new(frequency: Frequency, interval: u32, by_day: Vec<Weekday>) -> Self {
        Self {
            frequency,
            interval: interval.max(1),
            by_day,
        }
    }

    /// The wire format the backend stores: `FREQ=<f>;INTERVAL=<n>` plus
    /// `;BYDAY=<d,..>` for weekly rules with a day set.
    pub fn to_rule_string(&self) -> String {
        let mut rule = format!("FREQ={};INTERVAL={}", self.frequency.as_str(), self.interval);
        if self.frequency == Frequency::Weekly && !self.by_day.is_empty() {
            let days: Vec<&str> = self.by_day.iter().map(|d| d.code()).collect();
            rule.push_str(";BYDAY=");
            rule.push_str(&days.join(","));
        }
        rule
    }

    /// English description for display, e.g. "every week on Monday,
    /// Wednesday and Friday" or "every 2 days".
    pub fn describe(&self) -> String {
        let mut out = String::from("every ");
        if self.interval > 1 {
            out.push_str(&format!("{} {}s", self.interval, self.frequency.unit()));
        } else {
            out.push_str(self.frequency.unit());
        }
        if self.frequency == Frequency::Weekly && !self.by_day.is_empty() {
            out.push_str(" on ");
            out.push_str(&join_names(&self.by_day));
        }
        out
    }
}

fn join_names(days: &[Weekday]) -> String {
    match days {
        [] => String::new(),
        [only] => only.name().to_string(),
        [head @ .., last] => {
            let head: Vec<&str> = head.iter().map(|d| d.name()).collect();
            format!("{} and {}", head.join(", "), last.name())
        }
    }
}

impl FromStr for RecurrenceRule {
    type Err = RuleParseError;

    /// Parses any `KEY=VALUE;` rule the backend accepts. Keys this client
    /// does not model (DTSTART, COUNT, UNTIL, ...) are ignored so display
    /// tolerates every rule the backend stored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut frequency = None;
        let mut interval = 1u32;
        let mut by_day = Vec::new();

        for part in s.split(';') {
            let part = part.trim();
            if part.is_empty() {
                continue;
            }
            let (key, value) = match part.split_once('=') {
                Some(kv) => kv,
                None => continue,
            };
            match key {
                "FREQ" => frequency = Some(value.parse::<Frequency>()?),
                "INTERVAL" => {
                    interval = value
                        .parse::<u32>()
                        .ok()
                        .filter(|n| *n >= 1)
                        .ok_or_else(|| RuleParseError::BadInterval(value.to_string()))?;
                }
                "BYDAY" => {
                    by_day = value
                        .split(',')
                        .map(str::trim)
                        .filter(|d| !d.is_empty())
                        .map(str::parse)
                        .collect::<Result<Vec<_>, _>>()?;
                }
                _ => {}
            }
        }

        Ok(Self {
            frequency: frequency.ok_or(RuleParseError::MissingFrequency)?,
            interval,
            by_day,
        })
    }
}

impl fmt::Display for RecurrenceRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_rule_string())
    }
}

/// Human-readable text for a stored rule string, falling back to the raw
/// string when it cannot be parsed. Display only; the stored rule is never
/// rewritten.
pub fn describe_rule(raw: &str) -> String {
    match raw.parse::<RecurrenceRule>() {
        Ok(rule) => rule.describe(),
        Err(_) => raw.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekly_rule_round_trips_unchanged() {
        let raw = "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO,WE,FR";
        let rule: RecurrenceRule = raw.parse().unwrap();
        assert_eq!(rule.to_rule_string(), raw);
    }

    #[test]
    fn test_weekly_description() {
        let rule: RecurrenceRule = "FREQ=WEEKLY;INTERVAL=1;BYDAY=MO,WE,FR".parse().unwrap();
        assert_eq!(rule.describe(), "every week on Monday, Wednesday and Friday");
    }

    #[test]
    fn test_single_day_description() {
        let rule = RecurrenceRule::new(Frequency::Weekly, 1, vec![Weekday::Su]);
        assert_eq!(rule.describe(), "every week on Sunday");
    }

    #[test]
    fn test_interval_description() {
        assert_eq!(
            RecurrenceRule::new(Frequency::Daily, 2, vec![]).describe(),
            "every 2 days"
        );
        assert_eq!(
            RecurrenceRule::new(Frequency::Monthly, 1, vec![]).describe(),
            "every month"
        );
    }

    #[test]
    fn test_builder_emits_interval_and_byday() {
        let rule = RecurrenceRule::new(Frequency::Weekly, 2, vec![Weekday::Tu, Weekday::Th]);
        assert_eq!(rule.to_rule_string(), "FREQ=WEEKLY;INTERVAL=2;BYDAY=TU,TH");
    }

    #[test]
    fn test_byday_only_serialized_for_weekly() {
        let rule = RecurrenceRule::new(Frequency::Monthly, 1, vec![Weekday::Mo]);
        assert_eq!(rule.to_rule_string(), "FREQ=MONTHLY;INTERVAL=1");
    }

    #[test]
    fn test_missing_interval_defaults_to_one() {
        let rule: RecurrenceRule = "FREQ=DAILY".parse().unwrap();
        assert_eq!(rule.interval, 1);
        assert_eq!(rule.describe(), "every day");
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let rule: RecurrenceRule = "DTSTART=20240101T000000Z;FREQ=WEEKLY;COUNT=10;BYDAY=SA"
            .parse()
            .unwrap();
        assert_eq!(rule.frequency, Frequency::Weekly);
        assert_eq!(rule.by_day, vec![Weekday::Sa]);
    }

    #[test]
    fn test_invalid_rules_are_rejected() {
        assert_eq!(
            "INTERVAL=2".parse::<RecurrenceRule>(),
            Err(RuleParseError::MissingFrequency)
        );
        assert!(matches!(
            "FREQ=HOURLY".parse::<RecurrenceRule>(),
            Err(RuleParseError::UnknownFrequency(_))
        ));
        assert!(matches!(
            "FREQ=WEEKLY;INTERVAL=0".parse::<RecurrenceRule>(),
            Err(RuleParseError::BadInterval(_))
        ));
        assert!(matches!(
            "FREQ=WEEKLY;BYDAY=XX".parse::<RecurrenceRule>(),
            Err(RuleParseError::UnknownDay(_))
        ));
    }

    #[test]
    fn test_describe_rule_falls_back_to_raw() {
        assert_eq!(describe_rule("FREQ=HOURLY"), "FREQ=HOURLY");
        assert_eq!(describe_rule("FREQ=DAILY;INTERVAL=3"), "every 3 days");
    }
}
