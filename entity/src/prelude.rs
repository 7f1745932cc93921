pub use super::game::Entity as Game;
