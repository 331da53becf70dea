//! Club leagues a game can belong to.

use serde::{Deserialize, Serialize};

/// A league on the club's weekly schedule.
///
/// Serialized by display name, which is what stored records carry.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum League {
    #[default]
    #[serde(rename = "Monday Night Open")]
    MondayNightOpen,
    #[serde(rename = "Tuesday Supper")]
    TuesdaySupper,
    #[serde(rename = "Tuesday Super")]
    TuesdaySuper,
    #[serde(rename = "Wednesday Advance Juniors")]
    WednesdayAdvanceJuniors,
    #[serde(rename = "Wednesday Women's")]
    WednesdayWomens,
    #[serde(rename = "Thursday Morning")]
    ThursdayMorning,
    #[serde(rename = "Thursday Doubles")]
    ThursdayDoubles,
    #[serde(rename = "Thursday Men's")]
    ThursdayMens,
    #[serde(rename = "Friday Juniors")]
    FridayJuniors,
    #[serde(rename = "Friday Night Open")]
    FridayNightOpen,
    #[serde(rename = "Sunday Afternoon Open")]
    SundayAfternoonOpen,
    #[serde(rename = "Sunday Doubles")]
    SundayDoubles,
    #[serde(rename = "Sunday Semi-Competitive")]
    SundaySemiCompetitive,
}

impl League {
    /// Every league, in schedule order.
    pub const ALL: [League; 13] = [
        League::MondayNightOpen,
        League::TuesdaySupper,
        League::TuesdaySuper,
        League::WednesdayAdvanceJuniors,
        League::WednesdayWomens,
        League::ThursdayMorning,
        League::ThursdayDoubles,
        League::ThursdayMens,
        League::FridayJuniors,
        League::FridayNightOpen,
        League::SundayAfternoonOpen,
        League::SundayDoubles,
        League::SundaySemiCompetitive,
    ];

    /// Display name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            League::MondayNightOpen => "Monday Night Open",
            League::TuesdaySupper => "Tuesday Supper",
            League::TuesdaySuper => "Tuesday Super",
            League::WednesdayAdvanceJuniors => "Wednesday Advance Juniors",
            League::WednesdayWomens => "Wednesday Women's",
            League::ThursdayMorning => "Thursday Morning",
            League::ThursdayDoubles => "Thursday Doubles",
            League::ThursdayMens => "Thursday Men's",
            League::FridayJuniors => "Friday Juniors",
            League::FridayNightOpen => "Friday Night Open",
            League::SundayAfternoonOpen => "Sunday Afternoon Open",
            League::SundayDoubles => "Sunday Doubles",
            League::SundaySemiCompetitive => "Sunday Semi-Competitive",
        }
    }

    /// Resolve a 1-based menu choice.
    ///
    /// Out-of-range choices fall back to the default league.
    ///
    /// ```
    /// use curling_score::core::League;
    ///
    /// assert_eq!(League::from_index(2), League::TuesdaySupper);
    /// assert_eq!(League::from_index(0), League::MondayNightOpen);
    /// assert_eq!(League::from_index(99), League::MondayNightOpen);
    /// ```
    #[must_use]
    pub fn from_index(choice: usize) -> Self {
        choice
            .checked_sub(1)
            .and_then(|i| Self::ALL.get(i).copied())
            .unwrap_or_default()
    }

    /// Look up a league by display name.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|l| l.name() == name)
    }
}

impl std::fmt::Display for League {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}
