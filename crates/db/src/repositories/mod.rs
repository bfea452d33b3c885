//! Repository layer.
//!
//! Each repository is a zero-sized struct providing async CRUD methods
//! that accept `&PgPool` as the first argument.

pub mod actor_repo;
pub mod category_repo;
pub mod film_actor_repo;
pub mod film_category_repo;
pub mod film_repo;
pub mod language_repo;

pub use actor_repo::ActorRepo;
pub use category_repo::CategoryRepo;
pub use film_actor_repo::FilmActorRepo;
pub use film_category_repo::FilmCategoryRepo;
pub use film_repo::FilmRepo;
pub use language_repo::LanguageRepo;
