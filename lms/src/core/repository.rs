use async_trait::async_trait;
use crate::core::library::LibraryResult;

#[async_trait]
pub trait Repository<Entity>: Sync + Send {
    // create an entity, fails with DuplicateKey if the id is taken
    async fn create(&self, entity: &Entity) -> LibraryResult<usize>;

    // updates an entity if its version matches the stored one, the stored version is bumped
    async fn update(&self, entity: &Entity) -> LibraryResult<usize>;

    // get an entity, fails with NotFound
    async fn get(&self, id: &str) -> LibraryResult<Entity>;
}
