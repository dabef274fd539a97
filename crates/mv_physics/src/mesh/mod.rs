// crates/mv_physics/src/mesh/mod.rs

//! 网格数据提供层
//!
//! 界面捕捉格式所需的逐面数据由外部网格/场提供方给出，
//! 本模块定义其接口及一个 SoA 快照实现。

pub mod provider;
pub mod face_data;
pub mod courant;

pub use provider::{BoundaryCoupling, FaceDataProvider, FaceStencil};
pub use face_data::{StaticFaceData, StaticFaceDataBuilder};
pub use courant::{face_courant_numbers, max_courant};
