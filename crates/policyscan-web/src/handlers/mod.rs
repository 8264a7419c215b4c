pub mod analyze;
pub mod documents;
pub mod health;
pub mod history;
pub mod identify;
