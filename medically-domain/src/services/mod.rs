// Domain services
// Each service owns a shared store handle and is cheap to clone.
pub mod messages;
pub mod records;

pub use messages::MessageService;
pub use records::RecordService;
