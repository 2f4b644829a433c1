//! Closed catalogs offered by the registration form.
//!
//! Both catalogs are plain enums; their display strings are the exact values the
//! form submits and are the only accepted spellings when parsing.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use strum::{EnumMessage, IntoEnumIterator};
use strum_macros::{Display, EnumCount, EnumIter, EnumMessage, EnumString, IntoStaticStr};

/// The competitions and shows a participant can register for.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    IntoStaticStr,
)]
pub enum FestivalEvent {
    #[strum(serialize = "Battle of Bands")]
    BattleOfBands,
    #[strum(serialize = "Solo Singing")]
    SoloSinging,
    #[strum(serialize = "Dance Competition (Solo)")]
    DanceSolo,
    #[strum(serialize = "Dance Competition (Group)")]
    DanceGroup,
    #[strum(serialize = "Stand-up Comedy")]
    StandUpComedy,
    #[strum(serialize = "Photography Contest")]
    PhotographyContest,
    #[strum(serialize = "Art Exhibition")]
    ArtExhibition,
    #[strum(serialize = "Gaming Tournament")]
    GamingTournament,
    #[strum(serialize = "Fashion Show")]
    FashionShow,
    #[strum(serialize = "Drama/Theatre")]
    DramaTheatre,
    #[strum(serialize = "Debate Competition")]
    DebateCompetition,
    #[strum(serialize = "Quiz Competition")]
    QuizCompetition,
    #[strum(serialize = "Rangoli Making")]
    RangoliMaking,
    #[strum(serialize = "Face Painting")]
    FacePainting,
}

impl FestivalEvent {
    /// The canonical catalog name, e.g. `"Quiz Competition"`.
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// All events in catalog order.
    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

/// Team size bands.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumCount,
    EnumIter,
    EnumMessage,
    EnumString,
    IntoStaticStr,
)]
pub enum TeamSize {
    #[strum(serialize = "1", message = "Solo (1 person)")]
    Solo,
    #[strum(serialize = "2", message = "Duo (2 people)")]
    Duo,
    #[strum(serialize = "3-4", message = "Small Team (3-4 people)")]
    SmallTeam,
    #[strum(serialize = "5+", message = "Large Team (5+ people)")]
    LargeTeam,
}

impl TeamSize {
    /// The submitted value, e.g. `"3-4"`.
    #[must_use]
    pub fn value(self) -> &'static str {
        self.into()
    }

    /// Human-readable option label.
    #[must_use]
    pub fn label(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.value())
    }

    pub fn all() -> impl Iterator<Item = Self> {
        Self::iter()
    }
}

// Both catalogs travel as their display strings, not as variant names.

impl Serialize for FestivalEvent {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}

impl<'de> Deserialize<'de> for FestivalEvent {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|_| serde::de::Error::custom(format!("unknown festival event '{raw}'")))
    }
}

impl Serialize for TeamSize {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.value())
    }
}

impl<'de> Deserialize<'de> for TeamSize {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(|_| serde::de::Error::custom(format!("unknown team size '{raw}'")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::EnumCount;

    #[test]
    fn catalog_has_fourteen_events() {
        assert_eq!(FestivalEvent::COUNT, 14);
        assert_eq!(FestivalEvent::all().count(), 14);
        assert_eq!(FestivalEvent::all().next(), Some(FestivalEvent::BattleOfBands));
    }

    #[test]
    fn names_round_trip_through_parse() {
        for event in FestivalEvent::all() {
            assert_eq!(event.name().parse::<FestivalEvent>().ok(), Some(event));
        }
    }

    #[test]
    fn parsing_is_exact() {
        assert!("quiz competition".parse::<FestivalEvent>().is_err());
        assert!(" Quiz Competition".parse::<FestivalEvent>().is_err());
        assert!("QuizCompetition".parse::<FestivalEvent>().is_err());
    }

    #[test]
    fn team_sizes_use_form_values() {
        let values: Vec<_> = TeamSize::all().map(TeamSize::value).collect();
        assert_eq!(values, ["1", "2", "3-4", "5+"]);
        assert_eq!(TeamSize::SmallTeam.label(), "Small Team (3-4 people)");
        assert!("3".parse::<TeamSize>().is_err());
    }
}
