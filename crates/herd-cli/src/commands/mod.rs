pub mod dispatch;
pub mod evaluate;
pub mod migrate;
pub mod serve;
