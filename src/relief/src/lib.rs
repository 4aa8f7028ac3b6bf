//! Spring-chain relief curves: curve sampling, midpoint policies and the
//! chain builder that turns a sampled curve into particles and springs.

pub mod bezier;
pub mod chain;
pub mod config;
pub mod control;
pub mod error;
pub mod populate;

pub use bezier::{sample_curve, QuadBezier, SampledPath};
pub use chain::{Chain, ChainBuilder};
pub use config::SceneConfig;
pub use control::{ControlPoints, FixedMidpoints, MidpointPolicy, RandomBand};
pub use error::{ConfigError, CurveError};
pub use populate::populate;
