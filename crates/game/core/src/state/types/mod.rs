//! Plain data carried by [`Game`](super::Game).
mod abilities;
mod item;
mod messages;
mod monster;
mod player;
mod scene;

pub use abilities::Stats;
pub use item::Item;
pub use messages::Messages;
pub use monster::{Attack, Monster};
pub use player::Player;
pub use scene::{Scene, Turn};
