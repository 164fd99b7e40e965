//! Goal records and goal loading

mod data;
pub mod loader;

pub use data::{Goal, MAX_HORIZON_MONTHS, MAX_RATE_PERCENT};
pub use loader::{load_goal_json, load_goal_json_from_reader, load_goals, load_goals_from_reader};
