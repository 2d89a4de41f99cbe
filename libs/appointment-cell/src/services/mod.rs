pub mod reference;
pub mod writer;

pub use reference::ReferenceValidator;
pub use writer::AppointmentWriter;
