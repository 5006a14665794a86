//! Built-in enums shipped with the registry

use crate::adapter::{BackedEnum, EnumType};

/// Day of the week, stored as its lowercase English name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

/// Adapter for `DayOfWeek`, registered as `day_of_week`
pub type DayOfWeekEnumType = EnumType<DayOfWeek>;

impl DayOfWeek {
    /// All days, Monday first
    pub const ALL: [DayOfWeek; 7] = [
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
        Self::Sunday,
    ];

    /// Column type adapter for this enum
    pub fn adapter() -> DayOfWeekEnumType {
        EnumType::new("DayOfWeekEnumType")
    }

    pub fn weekend_days() -> [DayOfWeek; 2] {
        [Self::Saturday, Self::Sunday]
    }

    pub fn week_days() -> [DayOfWeek; 5] {
        [Self::Monday, Self::Tuesday, Self::Wednesday, Self::Thursday, Self::Friday]
    }

    pub fn is_weekend(&self) -> bool {
        Self::weekend_days().contains(self)
    }

    pub fn is_weekday(&self) -> bool {
        !self.is_weekend()
    }

    /// Capitalized value, e.g. `Monday`
    pub fn label(&self) -> String {
        let value = self.value();
        let mut chars = value.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// ISO-8601 day number (1 = Monday, 7 = Sunday)
    pub fn to_iso_number(&self) -> u8 {
        match self {
            Self::Monday => 1,
            Self::Tuesday => 2,
            Self::Wednesday => 3,
            Self::Thursday => 4,
            Self::Friday => 5,
            Self::Saturday => 6,
            Self::Sunday => 7,
        }
    }

    /// Day for an ISO-8601 day number
    pub fn from_iso_number(number: u8) -> Option<Self> {
        match number {
            1..=7 => Some(Self::ALL[usize::from(number) - 1]),
            _ => None,
        }
    }
}

impl BackedEnum for DayOfWeek {
    const NAME: &'static str = "DayOfWeek";

    fn cases() -> &'static [Self] {
        &Self::ALL
    }

    fn value(&self) -> &'static str {
        match self {
            Self::Monday => "monday",
            Self::Tuesday => "tuesday",
            Self::Wednesday => "wednesday",
            Self::Thursday => "thursday",
            Self::Friday => "friday",
            Self::Saturday => "saturday",
            Self::Sunday => "sunday",
        }
    }
}
