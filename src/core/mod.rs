pub mod driver;
pub mod render;

pub use crate::domain::model::{City, Client, Pokemon};
pub use crate::domain::ports::ScenarioProvider;
pub use crate::utils::error::Result;
