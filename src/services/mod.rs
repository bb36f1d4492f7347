pub mod hours;

pub use hours::{AssignBehavior, ResolveBehavior};
