use crate::server::data::repository::Repository;

/// Repository over the `games` table.
pub type GameRepository<'a> = Repository<'a, entity::game::Entity, entity::game::ActiveModel>;
