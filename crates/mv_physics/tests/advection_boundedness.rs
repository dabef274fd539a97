// crates/mv_physics/tests/advection_boundedness.rs

//! 一维阶跃输运有界性验证
//!
//! 40 个单元的一维行，前 10 个单元 φ = 1，其余为 0，
//! 正向均匀通量，Co = 0.2，显式欧拉推进。
//!
//! # 测试覆盖
//!
//! - 不同混合系数下 φ 始终位于 [0, 1]
//! - 出口未到达前总量守恒
//! - CICSAM 界面比迎风格式锐利
//! - 串行与并行遍历逐位一致

use mv_physics::{
    BoundaryCoupling, CellFieldView, CellGradients, Cicsam, FaceSweep, StaticFaceData,
    SurfaceInterpolationScheme, Upwind,
};

// ============================================================
// 常量
// ============================================================

const N_CELLS: usize = 40;
const STEP_CELLS: usize = 10;
const COURANT: f64 = 0.2;
const INFLOW: f64 = 1.0;
const BOUND_TOL: f64 = 1e-12;

// ============================================================
// 测试辅助设施
// ============================================================

/// 一维行网格：内部面 i → i+1，左侧入口、右侧出口均为物理边界
fn row_mesh() -> StaticFaceData<f64> {
    let mut builder = StaticFaceData::builder(N_CELLS);
    for i in 0..N_CELLS - 1 {
        builder = builder.internal_face(i, i + 1, [1.0, 0.0, 0.0], 0.5);
    }
    let n_faces = N_CELLS + 1;
    // 边界面通量按外法向：入口为负
    let mut flux = vec![1.0; n_faces];
    flux[N_CELLS - 1] = -1.0;
    builder
        .boundary_face(0, [-0.5, 0.0, 0.0], 1.0, BoundaryCoupling::Uncoupled)
        .boundary_face(N_CELLS - 1, [0.5, 0.0, 0.0], 1.0, BoundaryCoupling::Uncoupled)
        .flux(flux)
        .courant(vec![COURANT; n_faces])
        .build()
        .unwrap()
}

fn step_profile() -> Vec<f64> {
    (0..N_CELLS).map(|i| if i < STEP_CELLS { 1.0 } else { 0.0 }).collect()
}

/// 中心差分梯度，入口取来流值，出口零梯度外推
fn central_gradients(phi: &[f64]) -> CellGradients<f64> {
    let n = phi.len();
    let vectors: Vec<[f64; 3]> = (0..n)
        .map(|i| {
            let left = if i == 0 { INFLOW } else { phi[i - 1] };
            let right = if i + 1 == n { phi[n - 1] } else { phi[i + 1] };
            [0.5 * (right - left), 0.0, 0.0]
        })
        .collect();
    CellGradients::from_vectors(&vectors)
}

/// 显式推进一步
fn advance(scheme: &dyn SurfaceInterpolationScheme<f64>, mesh: &StaticFaceData<f64>, phi: &[f64]) -> Vec<f64> {
    let grads = central_gradients(phi);
    let field = CellFieldView::new(phi, &grads).unwrap();
    let weights = scheme.weight_field(mesh, &field).unwrap();

    // face_values[i] 为单元 i 左侧面的面值
    let mut face_values = Vec::with_capacity(N_CELLS + 1);
    face_values.push(INFLOW);
    for (i, &w) in weights.internal().iter().enumerate() {
        face_values.push(w * phi[i] + (1.0 - w) * phi[i + 1]);
    }
    face_values.push(phi[N_CELLS - 1]);

    (0..N_CELLS)
        .map(|i| phi[i] - COURANT * (face_values[i + 1] - face_values[i]))
        .collect()
}

fn run(scheme: &dyn SurfaceInterpolationScheme<f64>, steps: usize) -> Vec<f64> {
    let mesh = row_mesh();
    let mut phi = step_profile();
    for step in 0..steps {
        phi = advance(scheme, &mesh, &phi);
        for (i, &v) in phi.iter().enumerate() {
            assert!(
                v >= -BOUND_TOL && v <= 1.0 + BOUND_TOL,
                "{}: step {}, cell {}: φ = {}",
                scheme.type_name(),
                step,
                i,
                v
            );
        }
    }
    phi
}

/// 处于界面过渡区的单元数
fn smeared_cells(phi: &[f64]) -> usize {
    phi.iter().filter(|&&v| v > 0.01 && v < 0.99).count()
}

// ============================================================
// 有界性
// ============================================================

#[test]
fn test_step_stays_bounded_recommended() {
    run(&Cicsam::new(0.5).unwrap(), 100);
}

#[test]
fn test_step_stays_bounded_all_coefficients() {
    for k in [0.0, 0.25, 0.5, 0.75, 1.0] {
        run(&Cicsam::new(k).unwrap(), 100);
    }
}

#[test]
fn test_front_after_five_steps() {
    let phi = run(&Cicsam::new(0.5).unwrap(), 5);
    // 前沿移动一个单元
    assert!((phi[9] - 1.0).abs() < 1e-12);
    assert!(phi[10] > 0.85 && phi[10] < 0.9);
    assert!(phi[11] > 0.1 && phi[11] < 0.15);
    assert!(phi[12..].iter().all(|&v| v.abs() < 1e-12));
}

// ============================================================
// 守恒性与锐度
// ============================================================

#[test]
fn test_total_conserved_before_outflow() {
    let steps = 50;
    let phi = run(&Cicsam::recommended(), steps);
    let total: f64 = phi.iter().sum();
    let expected = STEP_CELLS as f64 + steps as f64 * COURANT * INFLOW;
    assert!((total - expected).abs() < 1e-9, "total = {}, expected = {}", total, expected);
}

#[test]
fn test_sharper_than_upwind() {
    let cicsam = run(&Cicsam::recommended(), 50);
    let upwind = run(&Upwind::new(), 50);
    let sharp = smeared_cells(&cicsam);
    let smeared = smeared_cells(&upwind);
    assert!(sharp <= 3, "CICSAM 过渡区 {} 个单元", sharp);
    assert!(sharp < smeared, "CICSAM {} vs upwind {}", sharp, smeared);
}

// ============================================================
// 并行一致性
// ============================================================

#[test]
fn test_parallel_sweep_bit_identical() {
    let seq = run(&Cicsam::recommended().with_sweep(FaceSweep::sequential()), 30);
    let par = run(&Cicsam::recommended().with_sweep(FaceSweep::parallel()), 30);
    for (a, b) in seq.iter().zip(&par) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}
