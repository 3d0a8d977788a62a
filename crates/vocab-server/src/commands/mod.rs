pub mod dispatch;
pub mod generate;
pub mod serve;
