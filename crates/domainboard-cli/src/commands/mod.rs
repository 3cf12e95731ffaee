pub mod records;
pub mod serve;
