pub mod clinics;
pub mod diseases;
pub mod health;
pub mod meds;
pub mod messages;
pub mod records;
pub mod users;
