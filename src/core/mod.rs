pub mod arithmetic;
pub mod engine;
pub mod numeral;
pub mod pipeline;
pub mod processor;
pub mod words;

pub use crate::domain::model::{LineOutcome, ProcessReport};
pub use crate::domain::ports::{ConfigProvider, Pipeline, Storage};
pub use crate::utils::error::Result;
