pub mod time;
pub mod print;
