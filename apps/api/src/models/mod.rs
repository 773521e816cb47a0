pub mod stream;
pub mod user;

pub use stream::{ScoreMap, Stream};
pub use user::{LoginMethod, ProfileUpdate, UserProfile};
