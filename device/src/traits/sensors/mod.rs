pub mod climate;
pub mod gas;
