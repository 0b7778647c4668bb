//! 滚动标准差
//!
//! 窗口为最近 `length` 个最终值, Welford 增量更新, O(1) 每次观测。
//! 输出总体标准差。

use core::num::NonZeroUsize;

use super::{length_of, non_zero_length, Indicator, IndicatorKind, Phase, WindowBase};
use crate::common::{Moments, RingBuffer};
use crate::error::IndicatorError;
use crate::value::IndicatorValue;

pub(crate) const DEFAULT_LENGTH: NonZeroUsize = length_of(20);

/// 标准差
#[derive(Debug, Clone)]
pub struct StandardDeviation {
    base: WindowBase,
    window: RingBuffer<f64>,
    moments: Moments,
}

impl StandardDeviation {
    pub fn new(length: usize) -> Result<Self, IndicatorError> {
        Ok(Self::with_length(non_zero_length(length)?))
    }

    pub fn with_length(length: NonZeroUsize) -> Self {
        Self {
            base: WindowBase::new(length),
            window: RingBuffer::new(length),
            moments: Moments::default(),
        }
    }

    /// 窗口内已提交的样本数
    pub fn samples(&self) -> usize {
        self.window.len()
    }
}

impl Default for StandardDeviation {
    fn default() -> Self {
        Self::with_length(DEFAULT_LENGTH)
    }
}

impl Indicator for StandardDeviation {
    type Input = f64;

    fn base(&self) -> &WindowBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WindowBase {
        &mut self.base
    }

    fn kind(&self) -> IndicatorKind {
        IndicatorKind::StandardDeviation
    }

    fn is_formed(&self) -> bool {
        self.window.is_full()
    }

    fn reset(&mut self) {
        self.base.reset();
        self.window = RingBuffer::new(self.base.active_length());
        self.moments = Moments::default();
    }

    fn process(&mut self, value: f64, phase: Phase) -> IndicatorValue {
        // 追加 value 之后的窗口 (已满则移除最旧值)
        let mut next = self.moments;
        if let Some(old) = self.window.evicting() {
            next.remove(old);
        }
        next.add(value);

        match phase {
            Phase::Final => {
                self.window.push(value);
                self.moments = next;
            }
            Phase::Provisional => {}
        }

        IndicatorValue::scalar(self.base.id(), next.variance().sqrt(), phase)
    }
}
