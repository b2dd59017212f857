pub mod calendar;
pub mod header;
pub mod modals;
pub mod styling;
