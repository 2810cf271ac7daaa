// SPDX-FileCopyrightText: 2025-2026 Zexin Yuan <aim@yzx9.xyz>
//
// SPDX-License-Identifier: Apache-2.0

use std::fmt::{self, Display};
use std::str::FromStr;

use serde::de;

use crate::ValidationError;

/// Day of the week, ordered from Sunday to Saturday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "clap", derive(clap::ValueEnum))]
#[expect(missing_docs)]
pub enum Weekday {
    #[cfg_attr(feature = "clap", value(name = "sun", aliases = ["sunday", "su"]))]
    Sunday,
    #[cfg_attr(feature = "clap", value(name = "mon", aliases = ["monday", "mo"]))]
    Monday,
    #[cfg_attr(feature = "clap", value(name = "tue", aliases = ["tuesday", "tu"]))]
    Tuesday,
    #[cfg_attr(feature = "clap", value(name = "wed", aliases = ["wednesday", "we"]))]
    Wednesday,
    #[cfg_attr(feature = "clap", value(name = "thu", aliases = ["thursday", "th"]))]
    Thursday,
    #[cfg_attr(feature = "clap", value(name = "fri", aliases = ["friday", "fr"]))]
    Friday,
    #[cfg_attr(feature = "clap", value(name = "sat", aliases = ["saturday", "sa"]))]
    Saturday,
}

impl Weekday {
    /// All weekdays from Sunday to Saturday.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Zero-based offset counted from Sunday.
    pub const fn sunday_zero_offset(self) -> u8 {
        self as u8
    }

    /// The weekday `n` days after this one, wrapping around the week.
    pub const fn wrapping_add(self, n: u8) -> Self {
        Self::ALL[((self as u8 + n % 7) % 7) as usize]
    }

    /// The number of days from `self` forward to `other`, in `0..7`.
    pub const fn days_until(self, other: Weekday) -> u8 {
        (other as u8 + 7 - self as u8) % 7
    }

    /// Three-letter English abbreviation, e.g. `Sun`.
    pub const fn short_name(self) -> &'static str {
        match self {
            Weekday::Sunday => "Sun",
            Weekday::Monday => "Mon",
            Weekday::Tuesday => "Tue",
            Weekday::Wednesday => "Wed",
            Weekday::Thursday => "Thu",
            Weekday::Friday => "Fri",
            Weekday::Saturday => "Sat",
        }
    }
}

impl Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.short_name())
    }
}

impl FromStr for Weekday {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sun" | "sunday" | "su" => Ok(Weekday::Sunday),
            "mon" | "monday" | "mo" => Ok(Weekday::Monday),
            "tue" | "tuesday" | "tu" => Ok(Weekday::Tuesday),
            "wed" | "wednesday" | "we" => Ok(Weekday::Wednesday),
            "thu" | "thursday" | "th" => Ok(Weekday::Thursday),
            "fri" | "friday" | "fr" => Ok(Weekday::Friday),
            "sat" | "saturday" | "sa" => Ok(Weekday::Saturday),
            _ => Err(ValidationError::UnknownWeekday(s.to_string())),
        }
    }
}

impl From<jiff::civil::Weekday> for Weekday {
    fn from(value: jiff::civil::Weekday) -> Self {
        match value {
            jiff::civil::Weekday::Sunday => Weekday::Sunday,
            jiff::civil::Weekday::Monday => Weekday::Monday,
            jiff::civil::Weekday::Tuesday => Weekday::Tuesday,
            jiff::civil::Weekday::Wednesday => Weekday::Wednesday,
            jiff::civil::Weekday::Thursday => Weekday::Thursday,
            jiff::civil::Weekday::Friday => Weekday::Friday,
            jiff::civil::Weekday::Saturday => Weekday::Saturday,
        }
    }
}

impl From<Weekday> for jiff::civil::Weekday {
    fn from(value: Weekday) -> Self {
        match value {
            Weekday::Sunday => jiff::civil::Weekday::Sunday,
            Weekday::Monday => jiff::civil::Weekday::Monday,
            Weekday::Tuesday => jiff::civil::Weekday::Tuesday,
            Weekday::Wednesday => jiff::civil::Weekday::Wednesday,
            Weekday::Thursday => jiff::civil::Weekday::Thursday,
            Weekday::Friday => jiff::civil::Weekday::Friday,
            Weekday::Saturday => jiff::civil::Weekday::Saturday,
        }
    }
}

impl serde::Serialize for Weekday {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(self.short_name())
    }
}

impl<'de> serde::Deserialize<'de> for Weekday {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        struct WeekdayVisitor;

        impl de::Visitor<'_> for WeekdayVisitor {
            type Value = Weekday;

            fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
                formatter.write_str(r#"a weekday like "Sun", "Monday" or "TU""#)
            }

            fn visit_str<E>(self, value: &str) -> Result<Self::Value, E>
            where
                E: de::Error,
            {
                value.parse::<Weekday>().map_err(de::Error::custom)
            }
        }

        deserializer.deserialize_str(WeekdayVisitor)
    }
}

/// A set of weekdays, one bit per day.
///
/// Duplicates collapse on insert and iteration always runs Sunday to Saturday.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct WeekdaySet(u8);

impl WeekdaySet {
    /// The empty set, meaning no weekday filter.
    pub const EMPTY: WeekdaySet = WeekdaySet(0);

    /// Creates an empty set.
    pub const fn new() -> Self {
        Self::EMPTY
    }

    const fn bit(day: Weekday) -> u8 {
        1 << day as u8
    }

    /// Adds a weekday, returns `false` if it was already present.
    pub fn insert(&mut self, day: Weekday) -> bool {
        let present = self.contains(day);
        self.0 |= Self::bit(day);
        !present
    }

    /// Removes a weekday, returns `true` if it was present.
    pub fn remove(&mut self, day: Weekday) -> bool {
        let present = self.contains(day);
        self.0 &= !Self::bit(day);
        present
    }

    /// Selects the weekday if unselected, unselects it otherwise.
    pub fn toggle(&mut self, day: Weekday) {
        self.0 ^= Self::bit(day);
    }

    /// Whether the weekday is in the set.
    pub const fn contains(&self, day: Weekday) -> bool {
        self.0 & Self::bit(day) != 0
    }

    /// Whether the set is empty.
    pub const fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// The number of selected weekdays.
    pub const fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Iterates the selected weekdays from Sunday to Saturday.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|day| self.contains(*day))
    }
}

impl FromIterator<Weekday> for WeekdaySet {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekdaySet::new();
        for day in iter {
            set.insert(day);
        }
        set
    }
}

impl<const N: usize> From<[Weekday; N]> for WeekdaySet {
    fn from(days: [Weekday; N]) -> Self {
        days.into_iter().collect()
    }
}

impl Display for WeekdaySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, day) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{day}")?;
        }
        Ok(())
    }
}

impl serde::Serialize for WeekdaySet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_seq(self.iter())
    }
}

impl<'de> serde::Deserialize<'de> for WeekdaySet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let days = Vec::<Weekday>::deserialize(deserializer)?;
        Ok(days.into_iter().collect())
    }
}
