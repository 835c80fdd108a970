pub mod conad;
pub mod prezzi_benzina;

pub use conad::ConadSource;
pub use prezzi_benzina::PrezziBenzinaSource;
