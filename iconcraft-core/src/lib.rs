pub mod appconfig;
pub mod layout;
pub mod manifest;
pub mod rasterizer;
pub mod spec;

pub use layout::{generate, plan, GenerateError, Generated, Plan};
pub use spec::{IconTarget, Platform};
