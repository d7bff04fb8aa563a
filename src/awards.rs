use serde::{Deserialize, Serialize};

/// The closed set of peer endorsement categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AwardType {
    GoodTeammate,
    Shotcaller,
    GoodSport,
    Mentor,
}

/// Display configuration for one endorsement category.
#[derive(Debug, Clone, Serialize)]
pub struct AwardConfig {
    #[serde(rename = "type")]
    pub award_type: AwardType,
    pub label: &'static str,
    pub short_label: &'static str,
    pub emoji: &'static str,
    pub description: &'static str,
}

static GOOD_TEAMMATE: AwardConfig = AwardConfig {
    award_type: AwardType::GoodTeammate,
    label: "Great Teammate",
    short_label: "Teammate",
    emoji: "🤝",
    description: "Communicates well and plays for the team.",
};

static SHOTCALLER: AwardConfig = AwardConfig {
    award_type: AwardType::Shotcaller,
    label: "Shot Caller",
    short_label: "Shotcaller",
    emoji: "📣",
    description: "Leads the lobby and keeps everyone on the same plan.",
};

static GOOD_SPORT: AwardConfig = AwardConfig {
    award_type: AwardType::GoodSport,
    label: "Good Sport",
    short_label: "Sport",
    emoji: "🏅",
    description: "Keeps a positive attitude, win or lose.",
};

static MENTOR: AwardConfig = AwardConfig {
    award_type: AwardType::Mentor,
    label: "Helpful Mentor",
    short_label: "Mentor",
    emoji: "🧭",
    description: "Takes time to help newer players improve.",
};

impl AwardType {
    pub const ALL: [AwardType; 4] = [
        AwardType::GoodTeammate,
        AwardType::Shotcaller,
        AwardType::GoodSport,
        AwardType::Mentor,
    ];

    /// Stored/wire key for this category.
    pub fn as_str(&self) -> &'static str {
        match self {
            AwardType::GoodTeammate => "good_teammate",
            AwardType::Shotcaller => "shotcaller",
            AwardType::GoodSport => "good_sport",
            AwardType::Mentor => "mentor",
        }
    }

    /// Parse a stored key. Returns None for retired or unknown categories.
    pub fn from_key(key: &str) -> Option<AwardType> {
        match key {
            "good_teammate" => Some(AwardType::GoodTeammate),
            "shotcaller" => Some(AwardType::Shotcaller),
            "good_sport" => Some(AwardType::GoodSport),
            "mentor" => Some(AwardType::Mentor),
            _ => None,
        }
    }

    /// Display configuration. Total over the enum.
    pub fn config(&self) -> &'static AwardConfig {
        match self {
            AwardType::GoodTeammate => &GOOD_TEAMMATE,
            AwardType::Shotcaller => &SHOTCALLER,
            AwardType::GoodSport => &GOOD_SPORT,
            AwardType::Mentor => &MENTOR,
        }
    }
}
