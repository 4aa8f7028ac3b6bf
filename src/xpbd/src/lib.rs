pub mod constraint;
pub mod error;
pub mod particle;
pub mod particle_group;
pub mod physical_model;
pub mod pworld;
pub mod time_manager;

pub use protocol::V2;
pub type C2 = nalgebra::Vector2<i32>;
