pub mod curves;
pub mod distance;
pub mod threshold;
pub mod translate;
