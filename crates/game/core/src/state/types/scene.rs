/// Coarse game mode.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Scene {
    /// At camp: start a fight or rest.
    #[default]
    Spawn,
    /// In combat against the current monster.
    Battle,
}

/// Whose action is permitted. Only meaningful during [`Scene::Battle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Turn {
    #[default]
    Player,
    Monster,
}
