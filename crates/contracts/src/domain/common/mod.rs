mod entity_id;
pub mod lenient;

pub use entity_id::EntityId;
