pub mod document;
pub mod field;
pub mod paper;
pub mod settings;
pub mod zone;
