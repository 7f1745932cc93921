//! Generic repository over SeaORM entities.
//!
//! `Repository` provides the same CRUD surface for any entity `E` with active model `A`.
//! Lookups never fail on a miss: absent rows come back as `None` or an empty `Vec`, and only
//! storage engine failures surface as `DbErr`.

use std::marker::PhantomData;

use sea_orm::{
    ActiveModelBehavior, ActiveModelTrait, Condition, DatabaseConnection, DbErr, EntityTrait,
    IntoActiveModel, PrimaryKeyTrait, QueryFilter,
};

/// Repository providing database operations for a single entity type.
///
/// Holds a reference to the database connection; construct one per operation, it is free.
pub struct Repository<'a, E, A> {
    db: &'a DatabaseConnection,
    _entity: PhantomData<(E, A)>,
}

impl<'a, E, A> Repository<'a, E, A>
where
    E: EntityTrait,
    A: ActiveModelTrait<Entity = E> + ActiveModelBehavior + Send + 'a,
    E::Model: IntoActiveModel<A>,
{
    /// Creates a new Repository instance.
    ///
    /// # Arguments
    /// - `db` - Reference to the database connection
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self {
            db,
            _entity: PhantomData,
        }
    }

    /// Gets an entity by primary key.
    ///
    /// # Returns
    /// - `Ok(Some(model))` - Entity found
    /// - `Ok(None)` - No entity with that key
    /// - `Err(DbErr)` - Database error during query
    pub async fn get_by_id<K>(&self, id: K) -> Result<Option<E::Model>, DbErr>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        E::find_by_id(id).one(self.db).await
    }

    /// Gets every entity of this type.
    pub async fn get_all(&self) -> Result<Vec<E::Model>, DbErr> {
        E::find().all(self.db).await
    }

    /// Gets every entity matching the condition.
    ///
    /// # Arguments
    /// - `condition` - Filter built from the entity's columns
    ///
    /// # Returns
    /// - `Ok(Vec<model>)` - Matching entities, empty if none match
    /// - `Err(DbErr)` - Database error during query
    pub async fn find(&self, condition: Condition) -> Result<Vec<E::Model>, DbErr> {
        E::find().filter(condition).all(self.db).await
    }

    /// Inserts a new entity.
    ///
    /// Leave the primary key `NotSet` so the store assigns it.
    ///
    /// # Returns
    /// - `Ok(model)` - The stored entity including its assigned key
    /// - `Err(DbErr)` - Database error during insert
    pub async fn add(&self, active_model: A) -> Result<E::Model, DbErr> {
        active_model.insert(self.db).await
    }

    /// Persists the set fields of an entity that already exists.
    ///
    /// Existence is not re-checked here; callers look the entity up first.
    ///
    /// # Returns
    /// - `Ok(model)` - The entity as stored after the update
    /// - `Err(DbErr::RecordNotUpdated)` - No row matched the primary key
    /// - `Err(DbErr)` - Other database error during update
    pub async fn update(&self, active_model: A) -> Result<E::Model, DbErr> {
        active_model.update(self.db).await
    }

    /// Deletes the row matching the entity's primary key.
    ///
    /// Deleting an entity that is already gone is not an error.
    pub async fn delete(&self, model: E::Model) -> Result<(), DbErr> {
        let active_model: A = model.into_active_model();
        active_model.delete(self.db).await?;

        Ok(())
    }

    /// Checks whether an entity with the given primary key exists.
    pub async fn exists<K>(&self, id: K) -> Result<bool, DbErr>
    where
        K: Into<<E::PrimaryKey as PrimaryKeyTrait>::ValueType>,
    {
        Ok(self.get_by_id(id).await?.is_some())
    }
}
