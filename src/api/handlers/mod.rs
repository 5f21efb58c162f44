pub mod author;
pub mod budget;
pub mod health;
