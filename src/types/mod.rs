//! Domain types for the aquaculture core.
//!
//! Plain records with no behavior beyond display/serde helpers. All derived
//! computation lives in the `metrics` module.

mod batch;
mod chat;
mod finance;
pub mod thresholds;
mod water;

pub use batch::{Batch, FishStage, NewBatch};
pub use chat::{ChatMessage, ChatRole};
pub use finance::{Expense, ExpenseCategory};
pub use thresholds::{feeding_table, water_emergency_band, water_safe_band};
pub use water::{WaterParameter, WaterQualityLog};
