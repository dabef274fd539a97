// crates/mv_physics/src/fields.rs

//! 场数据结构
//!
//! - [`CellGradients`]: 单元梯度 (SoA 布局)
//! - [`CellFieldView`]: 单元标量场及其梯度的只读快照
//! - [`SurfaceScalarField`]: 面标量场（内部面在前，边界面在后）
//! - [`SurfaceFieldRegistry`]: 按名称注册的面场集合
//!
//! 单元场与梯度由外部提供，本模块只做只读访问。

use std::collections::HashMap;

use mv_runtime::{RuntimeError, RuntimeResult, RuntimeScalar};

use crate::error::{SchemeError, SchemeResult};

/// 三维向量
pub type Vec3<S> = [S; 3];

/// 向量点积
#[inline]
pub fn dot<S: RuntimeScalar>(a: Vec3<S>, b: Vec3<S>) -> S {
    a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
}

/// 向量取反
#[inline]
pub fn negate<S: RuntimeScalar>(a: Vec3<S>) -> Vec3<S> {
    [-a[0], -a[1], -a[2]]
}

// ============================================================
// 单元梯度
// ============================================================

/// 单元标量场梯度存储 (SoA布局)
#[derive(Debug, Clone, Default)]
pub struct CellGradients<S: RuntimeScalar> {
    /// x方向梯度分量
    pub grad_x: Vec<S>,
    /// y方向梯度分量
    pub grad_y: Vec<S>,
    /// z方向梯度分量
    pub grad_z: Vec<S>,
}

impl<S: RuntimeScalar> CellGradients<S> {
    /// 创建指定大小的零梯度存储
    pub fn new(n: usize) -> Self {
        Self {
            grad_x: vec![S::ZERO; n],
            grad_y: vec![S::ZERO; n],
            grad_z: vec![S::ZERO; n],
        }
    }

    /// 从逐单元向量创建
    pub fn from_vectors(vectors: &[Vec3<S>]) -> Self {
        let mut g = Self::new(vectors.len());
        for (i, v) in vectors.iter().enumerate() {
            g.set(i, *v);
        }
        g
    }

    /// 获取单元梯度
    #[inline]
    pub fn get(&self, i: usize) -> Vec3<S> {
        [self.grad_x[i], self.grad_y[i], self.grad_z[i]]
    }

    /// 设置单元梯度
    #[inline]
    pub fn set(&mut self, i: usize, g: Vec3<S>) {
        self.grad_x[i] = g[0];
        self.grad_y[i] = g[1];
        self.grad_z[i] = g[2];
    }

    /// 存储大小
    pub fn len(&self) -> usize {
        self.grad_x.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.grad_x.is_empty()
    }
}

// ============================================================
// 单元场快照
// ============================================================

/// 单元标量场只读快照
///
/// 值与三个梯度分量的长度在构造时检查，之后按单元索引直接访问。
#[derive(Debug, Clone, Copy)]
pub struct CellFieldView<'a, S: RuntimeScalar> {
    values: &'a [S],
    gradients: &'a CellGradients<S>,
}

impl<'a, S: RuntimeScalar> CellFieldView<'a, S> {
    /// 创建快照
    pub fn new(values: &'a [S], gradients: &'a CellGradients<S>) -> RuntimeResult<Self> {
        RuntimeError::check_len("gradients.grad_x", values.len(), gradients.grad_x.len())?;
        RuntimeError::check_len("gradients.grad_y", values.len(), gradients.grad_y.len())?;
        RuntimeError::check_len("gradients.grad_z", values.len(), gradients.grad_z.len())?;
        Ok(Self { values, gradients })
    }

    /// 单元数
    #[inline]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否为空
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 单元值
    #[inline]
    pub fn value(&self, cell: usize) -> S {
        self.values[cell]
    }

    /// 单元梯度
    #[inline]
    pub fn gradient(&self, cell: usize) -> Vec3<S> {
        self.gradients.get(cell)
    }

    /// 全部单元值
    pub fn values(&self) -> &'a [S] {
        self.values
    }
}

// ============================================================
// 面场
// ============================================================

/// 面标量场
///
/// 索引约定：`[0, n_internal)` 为内部面，其后为边界面。
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceScalarField<S: RuntimeScalar> {
    name: String,
    values: Vec<S>,
    n_internal: usize,
}

impl<S: RuntimeScalar> SurfaceScalarField<S> {
    /// 创建面场
    pub fn new(name: impl Into<String>, values: Vec<S>, n_internal: usize) -> RuntimeResult<Self> {
        if n_internal > values.len() {
            return Err(RuntimeError::BufferSizeMismatch {
                buffer: "surface field internal faces",
                expected: values.len(),
                actual: n_internal,
            });
        }
        Ok(Self {
            name: name.into(),
            values,
            n_internal,
        })
    }

    /// 场名
    pub fn name(&self) -> &str {
        &self.name
    }

    /// 面数
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// 是否为空
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 内部面数
    pub fn n_internal(&self) -> usize {
        self.n_internal
    }

    /// 面值
    #[inline]
    pub fn get(&self, face: usize) -> S {
        self.values[face]
    }

    /// 全部面值
    pub fn values(&self) -> &[S] {
        &self.values
    }

    /// 内部面值
    pub fn internal(&self) -> &[S] {
        &self.values[..self.n_internal]
    }

    /// 边界面值
    pub fn boundary(&self) -> &[S] {
        &self.values[self.n_internal..]
    }

    /// 取出底层数据
    pub fn into_values(self) -> Vec<S> {
        self.values
    }
}

// ============================================================
// 面场注册表
// ============================================================

/// 按名称注册的面场集合
///
/// 格式条目中的通量场名在构造时从这里解析。
#[derive(Debug, Clone, Default)]
pub struct SurfaceFieldRegistry<S: RuntimeScalar> {
    fields: HashMap<String, SurfaceScalarField<S>>,
}

impl<S: RuntimeScalar> SurfaceFieldRegistry<S> {
    /// 创建空注册表
    pub fn new() -> Self {
        Self {
            fields: HashMap::new(),
        }
    }

    /// 注册面场（同名覆盖）
    pub fn register(&mut self, field: SurfaceScalarField<S>) {
        self.fields.insert(field.name().to_string(), field);
    }

    /// 按名称查找
    pub fn get(&self, name: &str) -> Option<&SurfaceScalarField<S>> {
        self.fields.get(name)
    }

    /// 已注册的场名（排序）
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.fields.keys().cloned().collect();
        names.sort();
        names
    }

    /// 按名称查找，未注册时返回带构造位置的错误
    pub fn lookup(&self, name: &str, site: &'static str) -> SchemeResult<&SurfaceScalarField<S>> {
        self.get(name).ok_or_else(|| SchemeError::UnknownField {
            site,
            name: name.to_string(),
            available: self.names(),
        })
    }
}
