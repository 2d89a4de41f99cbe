pub mod memory;
pub mod pool;
pub mod postgres;
pub mod store;

pub use memory::MemoryStore;
pub use pool::Database;
pub use postgres::PgStore;
pub use store::{AppointmentStore, ProfessionalStore, Stores, UserStore};
