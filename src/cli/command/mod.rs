pub mod chart;
pub mod summary;

pub use chart::chart;
pub use summary::summary;
