//! 面 Courant 数
//!
//! Co_f = Δt · δ_f · |F_f| / |S_f|
//!
//! 其中 δ_f 为单元中心间距的倒数，F_f 为面体积通量，|S_f| 为面面积。
//! Co_f > 1 时压缩格式的有界性判据不再处于其标称范围。

use mv_runtime::{RuntimeError, RuntimeResult, RuntimeScalar};

/// 计算所有面的 Courant 数
///
/// 面积退化（|S_f| 为零）的面取 0。
pub fn face_courant_numbers<S: RuntimeScalar>(
    flux: &[S],
    delta_coeffs: &[S],
    mag_sf: &[S],
    delta_t: S,
) -> RuntimeResult<Vec<S>> {
    RuntimeError::check_len("delta_coeffs", flux.len(), delta_coeffs.len())?;
    RuntimeError::check_len("mag_sf", flux.len(), mag_sf.len())?;

    let courant: Vec<S> = flux
        .iter()
        .zip(delta_coeffs)
        .zip(mag_sf)
        .map(|((&f, &dc), &area)| {
            (delta_t * dc * f.abs()).safe_div_eps(area, S::MIN_POSITIVE, S::ZERO)
        })
        .collect();

    if let Some(co_max) = max_courant(&courant) {
        if co_max > S::ONE {
            log::warn!("面 Courant 数最大值 {:.3} > 1，界面压缩可能失去有界性保证", co_max);
        }
    }

    Ok(courant)
}

/// 最大 Courant 数（空输入返回 None）
pub fn max_courant<S: RuntimeScalar>(courant: &[S]) -> Option<S> {
    courant.iter().copied().reduce(|a, b| if b > a { b } else { a })
}
