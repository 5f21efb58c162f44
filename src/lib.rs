// Public library interface for budget-back-end
pub mod action_router;
pub mod api;
pub mod author;
pub mod budget;
pub mod schema;
pub mod storage;
pub mod utils;
