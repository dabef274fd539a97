// crates/mv_physics/src/numerics/mod.rs

//! 数值方法模块
//!
//! 包含：
//! - interface/ - 界面捕捉面插值 (CICSAM, upwind, linear)

pub mod interface;

pub use interface::{
    create_scheme, create_scheme_from_entry, limited_weight, Cicsam, CicsamGeneric, FaceSweep,
    LimitedScheme, Linear, LinearGeneric, SurfaceInterpolationScheme, SweepStrategy, Upwind,
    UpwindGeneric,
};
