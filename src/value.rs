//! 指标值
//!
//! 数据源与指标之间、组合指标与子指标之间传递的值。

use std::sync::atomic::{AtomicU32, Ordering};

use serde::{Deserialize, Serialize};

use crate::error::IndicatorError;

static NEXT_ID: AtomicU32 = AtomicU32::new(1);

/// 产生该值的指标标识
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct IndicatorId(pub u32);

impl IndicatorId {
    /// 分配进程内唯一的 id
    pub fn next() -> Self {
        Self(NEXT_ID.fetch_add(1, Ordering::Relaxed))
    }
}

/// 观测是否结束当前周期
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Phase {
    /// 当前周期的中间更新, 之后可能被修正
    Provisional,
    /// 周期已结束, 提交状态
    #[default]
    Final,
}

impl Phase {
    #[inline]
    pub fn is_final(self) -> bool {
        matches!(self, Phase::Final)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Payload {
    /// 占位值: 指标尚无有意义的结果
    #[default]
    Empty,
    Scalar(f64),
    Pair(f64, f64),
}

impl Payload {
    pub fn shape(&self) -> &'static str {
        match self {
            Payload::Empty => "empty",
            Payload::Scalar(_) => "scalar",
            Payload::Pair(..) => "pair",
        }
    }
}

impl TryFrom<Payload> for f64 {
    type Error = IndicatorError;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        match payload {
            Payload::Scalar(v) => Ok(v),
            Payload::Empty => Ok(0.0),
            Payload::Pair(..) => Err(IndicatorError::PayloadMismatch {
                expected: "scalar",
                found: payload.shape(),
            }),
        }
    }
}

impl TryFrom<Payload> for (f64, f64) {
    type Error = IndicatorError;

    fn try_from(payload: Payload) -> Result<Self, Self::Error> {
        match payload {
            Payload::Pair(a, b) => Ok((a, b)),
            other => Err(IndicatorError::PayloadMismatch {
                expected: "pair",
                found: other.shape(),
            }),
        }
    }
}

/// 一次输出: 数据、阶段、所属指标
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IndicatorValue {
    pub payload: Payload,
    pub phase: Phase,
    pub owner: IndicatorId,
}

impl IndicatorValue {
    pub fn new(owner: IndicatorId, payload: Payload, phase: Phase) -> Self {
        Self {
            payload,
            phase,
            owner,
        }
    }

    pub fn scalar(owner: IndicatorId, v: f64, phase: Phase) -> Self {
        Self::new(owner, Payload::Scalar(v), phase)
    }

    pub fn pair(owner: IndicatorId, a: f64, b: f64, phase: Phase) -> Self {
        Self::new(owner, Payload::Pair(a, b), phase)
    }

    pub fn empty(owner: IndicatorId, phase: Phase) -> Self {
        Self::new(owner, Payload::Empty, phase)
    }

    #[inline]
    pub fn is_final(&self) -> bool {
        self.phase.is_final()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        matches!(self.payload, Payload::Empty)
    }

    /// 标量读数 (占位值与二元组读作 `0.0`)
    #[inline]
    pub fn to_f64(&self) -> f64 {
        match self.payload {
            Payload::Scalar(v) => v,
            Payload::Empty | Payload::Pair(..) => 0.0,
        }
    }
}
