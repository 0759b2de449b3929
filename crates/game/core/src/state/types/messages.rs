/// Latest battle and camp messages, one slot per source.
///
/// Each slot holds only the most recent line. Presentation keeps its own
/// history if it wants one.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Messages {
    /// Camp-level outcome: rest, victory, death, retreat.
    pub notice: Option<String>,
    /// Result of the player's latest attack.
    pub player_action: Option<String>,
    /// Result of the monster's latest attack.
    pub monster_action: Option<String>,
}

impl Messages {
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    pub fn is_empty(&self) -> bool {
        self.notice.is_none() && self.player_action.is_none() && self.monster_action.is_none()
    }
}
