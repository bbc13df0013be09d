pub mod advisor;
pub mod catalog;
pub mod cli;
pub mod query;
pub mod ui;

pub use advisor::{Advice, Advisor, ChatTurn};
pub use catalog::{Category, DataType, Record};
pub use cli::{Cli, Commands};
pub use query::{evaluate, FilterOptions};
