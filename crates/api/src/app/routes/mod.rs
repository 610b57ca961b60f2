pub mod search;
pub mod system;
pub mod users;
