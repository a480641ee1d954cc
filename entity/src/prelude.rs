pub use super::event::Entity as Event;
pub use super::match_game::Entity as MatchGame;
pub use super::player::Entity as Player;
pub use super::season::Entity as Season;
pub use super::team::Entity as Team;
pub use super::tournament::Entity as Tournament;
pub use super::user::Entity as User;
