//! 滚动协方差
//!
//! 窗口为最近 `length` 个最终值对, 以均值为中心增量更新交叉离差和,
//! 输出总体协方差。

use core::num::NonZeroUsize;

use super::{length_of, non_zero_length, Indicator, IndicatorKind, Phase, WindowBase};
use crate::common::{CoMoments, RingBuffer};
use crate::error::IndicatorError;
use crate::value::IndicatorValue;

pub(crate) const DEFAULT_LENGTH: NonZeroUsize = length_of(20);

#[derive(Debug, Clone)]
pub struct Covariance {
    base: WindowBase,
    window: RingBuffer<(f64, f64)>,
    moments: CoMoments,
}

impl Covariance {
    pub fn new(length: usize) -> Result<Self, IndicatorError> {
        Ok(Self::with_length(non_zero_length(length)?))
    }

    pub fn with_length(length: NonZeroUsize) -> Self {
        Self {
            base: WindowBase::new(length),
            window: RingBuffer::new(length),
            moments: CoMoments::default(),
        }
    }

    pub fn samples(&self) -> usize {
        self.window.len()
    }
}

impl Default for Covariance {
    fn default() -> Self {
        Self::with_length(DEFAULT_LENGTH)
    }
}

impl Indicator for Covariance {
    type Input = (f64, f64);

    fn base(&self) -> &WindowBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WindowBase {
        &mut self.base
    }

    fn kind(&self) -> IndicatorKind {
        IndicatorKind::Covariance
    }

    fn is_formed(&self) -> bool {
        self.window.is_full()
    }

    fn reset(&mut self) {
        self.base.reset();
        self.window = RingBuffer::new(self.base.active_length());
        self.moments = CoMoments::default();
    }

    fn process(&mut self, (x, y): (f64, f64), phase: Phase) -> IndicatorValue {
        let mut next = self.moments;
        if let Some((ox, oy)) = self.window.evicting() {
            next.remove(ox, oy);
        }
        next.add(x, y);

        match phase {
            Phase::Final => {
                self.window.push((x, y));
                self.moments = next;
            }
            Phase::Provisional => {}
        }

        IndicatorValue::scalar(self.base.id(), next.covariance(), phase)
    }
}
