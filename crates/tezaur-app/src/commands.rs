pub mod build;
pub mod evaluate;
pub mod prepare;
