/// A single monster action, as catalogued by the content source.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Attack {
    pub name: String,
    pub description: String,
    pub attack_bonus: i32,
    pub damage_dice: String,
}

impl Attack {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// The opponent of the current battle.
///
/// Replaced wholesale on every successful fetch and discarded when the
/// battle ends.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monster {
    pub name: String,
    /// Empty when the source had nothing to say.
    pub description: String,
    pub hit_points: u32,
    pub armor_class: i32,
    /// Display-only difficulty label.
    pub challenge_rating: String,
    /// Only the first entry is used, as flavor for the monster's turn.
    pub attacks: Vec<Attack>,
}

impl Monster {
    pub const NO_DESCRIPTION: &'static str = "No description available.";

    pub fn new(name: impl Into<String>, hit_points: u32, armor_class: i32) -> Self {
        Self {
            name: name.into(),
            hit_points,
            armor_class,
            ..Self::default()
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_attack(mut self, attack: Attack) -> Self {
        self.attacks.push(attack);
        self
    }

    pub fn is_alive(&self) -> bool {
        self.hit_points > 0
    }

    /// Name of the attack shown during the monster's turn.
    pub fn signature_attack(&self) -> Option<&str> {
        self.attacks.first().map(|attack| attack.name.as_str())
    }

    /// Description suitable for display.
    ///
    /// The upstream API spells "no description" as an empty string or as the
    /// literal `False`; both render as [`Self::NO_DESCRIPTION`].
    pub fn display_description(&self) -> &str {
        let trimmed = self.description.trim();
        if trimmed.is_empty() || trimmed == "False" {
            Self::NO_DESCRIPTION
        } else {
            &self.description
        }
    }
}
