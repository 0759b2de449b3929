//! JSON shapes returned by the Open5e monsters endpoint.
//!
//! Only the fields the game reads are modelled; everything else is ignored.
use game_core::{Attack, Monster};
use serde::{Deserialize, Deserializer};

/// Envelope around every list response.
#[derive(Debug, Clone, Deserialize)]
pub struct Paginated<T> {
    pub count: usize,
    #[serde(default = "Vec::new")]
    pub results: Vec<T>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct MonsterRecord {
    pub name: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub desc: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub hit_points: u32,
    #[serde(default)]
    pub armor_class: i32,
    #[serde(default, deserialize_with = "loose_text")]
    pub challenge_rating: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub actions: Vec<ActionRecord>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionRecord {
    pub name: String,
    #[serde(default, deserialize_with = "loose_text")]
    pub desc: String,
    #[serde(default)]
    pub attack_bonus: Option<i32>,
    #[serde(default, deserialize_with = "loose_text")]
    pub damage_dice: String,
}

impl MonsterRecord {
    /// Whether the record carries a usable description.
    pub fn is_described(&self) -> bool {
        !self.desc.trim().is_empty()
    }
}

impl From<ActionRecord> for Attack {
    fn from(record: ActionRecord) -> Self {
        Attack {
            name: record.name,
            description: record.desc,
            attack_bonus: record.attack_bonus.unwrap_or_default(),
            damage_dice: record.damage_dice,
        }
    }
}

impl From<MonsterRecord> for Monster {
    fn from(record: MonsterRecord) -> Self {
        Monster {
            name: record.name,
            description: record.desc,
            hit_points: record.hit_points,
            armor_class: record.armor_class,
            challenge_rating: record.challenge_rating,
            attacks: record.actions.into_iter().map(Attack::from).collect(),
        }
    }
}

/// Text fields the API sometimes fills with a boolean, a number or null.
#[derive(Deserialize)]
#[serde(untagged)]
enum LooseText {
    Text(String),
    Flag(#[allow(dead_code)] bool),
    Number(serde_json::Number),
}

/// Accepts strings, numbers, booleans and null.
///
/// `false`, `null` and the literal string `"False"` all mean "absent" and
/// normalize to `""`.
fn loose_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Option::<LooseText>::deserialize(deserializer)?;
    Ok(match value {
        Some(LooseText::Text(text)) if text.trim() == "False" => String::new(),
        Some(LooseText::Text(text)) => text,
        Some(LooseText::Number(number)) => number.to_string(),
        Some(LooseText::Flag(_)) | None => String::new(),
    })
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    Ok(Option::<Vec<T>>::deserialize(deserializer)?.unwrap_or_default())
}
