//! 相对强弱指数 (RSI)
//!
//! RSI = 100 - 100 / (1 + RS)
//! RS = 平滑涨幅 / 平滑跌幅, 两者各由一个 Wilder 平滑均线计算。

use core::num::NonZeroUsize;

use tracing::{debug, trace};

use super::{
    length_of, non_zero_length, Indicator, IndicatorKind, Measure, Phase, SmoothedMovingAverage,
    WindowBase,
};
use crate::error::IndicatorError;
use crate::value::IndicatorValue;

pub(crate) const DEFAULT_LENGTH: NonZeroUsize = length_of(15);

#[derive(Debug, Clone)]
pub struct RelativeStrengthIndex {
    base: WindowBase,
    gain: SmoothedMovingAverage,
    loss: SmoothedMovingAverage,
    /// 最近一次提交的观测值 (收到第一个最终值之前为 `None`)
    last: Option<f64>,
}

impl RelativeStrengthIndex {
    pub fn new(length: usize) -> Result<Self, IndicatorError> {
        Ok(Self::with_length(non_zero_length(length)?))
    }

    pub fn with_length(length: NonZeroUsize) -> Self {
        Self {
            base: WindowBase::new(length),
            gain: SmoothedMovingAverage::with_length(length),
            loss: SmoothedMovingAverage::with_length(length),
            last: None,
        }
    }

    pub fn gain(&self) -> &SmoothedMovingAverage {
        &self.gain
    }

    pub fn loss(&self) -> &SmoothedMovingAverage {
        &self.loss
    }

    /// 下一次涨跌的基准
    pub fn last(&self) -> Option<f64> {
        self.last
    }

    fn rsi_from(gain: f64, loss: f64) -> f64 {
        if loss == 0.0 {
            return 100.0;
        }
        let rs = gain / loss;
        if rs == 1.0 {
            return 0.0;
        }
        100.0 - 100.0 / (1.0 + rs)
    }
}

impl Default for RelativeStrengthIndex {
    fn default() -> Self {
        Self::with_length(DEFAULT_LENGTH)
    }
}

impl Indicator for RelativeStrengthIndex {
    type Input = f64;

    fn base(&self) -> &WindowBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut WindowBase {
        &mut self.base
    }

    fn kind(&self) -> IndicatorKind {
        IndicatorKind::RelativeStrengthIndex
    }

    fn measure(&self) -> Measure {
        Measure::Percent
    }

    fn is_formed(&self) -> bool {
        self.gain.is_formed()
    }

    fn reset(&mut self) {
        self.base.reset();

        let length = self.base.active_length();
        debug!(id = self.base.id().0, length = length.get(), "rsi reset");
        self.gain.configure(length);
        self.loss.configure(length);
        self.last = None;
    }

    fn process(&mut self, value: f64, phase: Phase) -> IndicatorValue {
        let Some(last) = self.last else {
            match phase {
                Phase::Final => {
                    trace!(id = self.base.id().0, value, "rsi baseline");
                    self.last = Some(value);
                }
                Phase::Provisional => {}
            }
            return IndicatorValue::empty(self.base.id(), phase);
        };

        let delta = value - last;
        let gain = self.gain.process(delta.max(0.0), phase).to_f64();
        let loss = self.loss.process((-delta).max(0.0), phase).to_f64();

        match phase {
            Phase::Final => self.last = Some(value),
            Phase::Provisional => {}
        }

        IndicatorValue::scalar(self.base.id(), Self::rsi_from(gain, loss), phase)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rsi_uptrend() {
        let mut rsi = RelativeStrengthIndex::default();
        assert_eq!(rsi.length(), 15);

        let first = rsi.process(100.0, Phase::Final);
        assert!(first.is_empty());
        assert_eq!(first.to_f64(), 0.0);
        assert!(!rsi.is_formed());

        for i in 1..16 {
            let v = rsi.process(100.0 + i as f64, Phase::Final);
            assert_eq!(v.to_f64(), 100.0);
        }
        assert!(rsi.is_formed());
        assert_eq!(rsi.loss().committed(), 0.0);
    }

    #[test]
    fn test_rsi_downtrend() {
        let mut rsi = RelativeStrengthIndex::new(14).unwrap();
        let mut last = f64::NAN;
        for i in 0..40 {
            last = rsi.process(200.0 - i as f64, Phase::Final).to_f64();
        }
        assert!(rsi.is_formed());
        assert_eq!(last, 0.0);
    }

    #[test]
    fn test_rsi_range() {
        let mut rsi = RelativeStrengthIndex::new(14).unwrap();
        for i in 0..60 {
            let price = if i % 2 == 0 {
                100.0 + i as f64
            } else {
                100.0 - i as f64 * 0.5
            };
            let v = rsi.process(price, Phase::Final).to_f64();
            assert!((0.0..=100.0).contains(&v));
        }
    }

    #[test]
    fn test_equal_gain_and_loss_is_zero() {
        assert_eq!(RelativeStrengthIndex::rsi_from(2.0, 2.0), 0.0);
        assert_eq!(RelativeStrengthIndex::rsi_from(0.0, 0.0), 100.0);
        assert_eq!(RelativeStrengthIndex::rsi_from(3.0, 0.0), 100.0);
        assert!((RelativeStrengthIndex::rsi_from(1.0, 3.0) - 25.0).abs() < 1e-12);
    }

    #[test]
    fn test_provisional_before_baseline() {
        let mut rsi = RelativeStrengthIndex::new(3).unwrap();
        let v = rsi.process(10.0, Phase::Provisional);
        assert!(v.is_empty());
        assert_eq!(rsi.last(), None);

        // 仍未初始化: 下一个最终值设定基准
        assert!(rsi.process(11.0, Phase::Final).is_empty());
        assert_eq!(rsi.last(), Some(11.0));
    }

    #[test]
    fn test_provisional_keeps_baseline() {
        let mut rsi = RelativeStrengthIndex::new(3).unwrap();
        for p in [10.0, 11.0, 10.5, 12.0] {
            rsi.process(p, Phase::Final);
        }
        let committed_gain = rsi.gain().committed();
        let committed_loss = rsi.loss().committed();

        let a = rsi.process(15.0, Phase::Provisional);
        let b = rsi.process(15.0, Phase::Provisional);
        rsi.process(8.0, Phase::Provisional);
        assert_eq!(a, b);
        assert_eq!(rsi.last(), Some(12.0));
        assert_eq!(rsi.gain().committed(), committed_gain);
        assert_eq!(rsi.loss().committed(), committed_loss);

        // 同一周期的最终值与中间预览一致
        let c = rsi.process(15.0, Phase::Final);
        assert_eq!(c.to_f64(), a.to_f64());
        assert_eq!(rsi.last(), Some(15.0));
    }

    #[test]
    fn test_reset_returns_to_uninitialized() {
        let mut rsi = RelativeStrengthIndex::new(2).unwrap();
        for p in [1.0, 2.0, 3.0] {
            rsi.process(p, Phase::Final);
        }
        assert!(rsi.is_formed());

        rsi.set_length(4).unwrap();
        rsi.reset();
        assert_eq!(rsi.last(), None);
        assert_eq!(rsi.gain().length(), 4);
        assert_eq!(rsi.loss().length(), 4);
        assert!(rsi.process(5.0, Phase::Final).is_empty());

        for p in [6.0, 7.0, 8.0] {
            rsi.process(p, Phase::Final);
        }
        assert!(!rsi.is_formed());
        rsi.process(9.0, Phase::Final);
        assert!(rsi.is_formed());
    }

    #[test]
    fn test_measure_is_percent() {
        assert_eq!(RelativeStrengthIndex::default().measure(), Measure::Percent);
    }
}
