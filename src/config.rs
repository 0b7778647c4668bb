//! 指标配置
//!
//! ```json
//! [{ "kind": "relative_strength_index", "length": 14 }, { "kind": "correlation" }]
//! ```
//!
//! 未给出 `length` 时使用该指标的默认周期。

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::IndicatorError;
use crate::indicators::{
    non_zero_length, Correlation, Covariance, Indicator, IndicatorKind, Measure,
    RelativeStrengthIndex, SmoothedMovingAverage, StandardDeviation,
};
use crate::value::{IndicatorId, IndicatorValue};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct IndicatorConfig {
    pub kind: IndicatorKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub length: Option<usize>,
}

impl IndicatorConfig {
    pub fn new(kind: IndicatorKind) -> Self {
        Self { kind, length: None }
    }

    pub fn with_length(kind: IndicatorKind, length: usize) -> Self {
        Self {
            kind,
            length: Some(length),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, IndicatorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn list_from_json(json: &str) -> Result<Vec<Self>, IndicatorError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn build(&self) -> Result<AnyIndicator, IndicatorError> {
        let length = match self.length {
            Some(length) => non_zero_length(length)?,
            None => self.kind.default_length(),
        };
        debug!(kind = ?self.kind, length = length.get(), "building indicator");

        Ok(match self.kind {
            IndicatorKind::SmoothedMovingAverage => {
                AnyIndicator::Smma(SmoothedMovingAverage::with_length(length))
            }
            IndicatorKind::StandardDeviation => {
                AnyIndicator::StdDev(StandardDeviation::with_length(length))
            }
            IndicatorKind::Covariance => AnyIndicator::Covariance(Covariance::with_length(length)),
            IndicatorKind::Correlation => {
                AnyIndicator::Correlation(Correlation::with_length(length))
            }
            IndicatorKind::RelativeStrengthIndex => {
                AnyIndicator::Rsi(RelativeStrengthIndex::with_length(length))
            }
        })
    }
}

/// 任意具体指标, 通过通用值驱动
#[derive(Debug, Clone)]
pub enum AnyIndicator {
    Smma(SmoothedMovingAverage),
    StdDev(StandardDeviation),
    Covariance(Covariance),
    Correlation(Correlation),
    Rsi(RelativeStrengthIndex),
}

macro_rules! dispatch {
    ($self:expr, $ind:ident => $body:expr) => {
        match $self {
            AnyIndicator::Smma($ind) => $body,
            AnyIndicator::StdDev($ind) => $body,
            AnyIndicator::Covariance($ind) => $body,
            AnyIndicator::Correlation($ind) => $body,
            AnyIndicator::Rsi($ind) => $body,
        }
    };
}

impl AnyIndicator {
    pub fn id(&self) -> IndicatorId {
        dispatch!(self, ind => ind.id())
    }

    pub fn kind(&self) -> IndicatorKind {
        dispatch!(self, ind => ind.kind())
    }

    pub fn length(&self) -> usize {
        dispatch!(self, ind => ind.length())
    }

    pub fn set_length(&mut self, length: usize) -> Result<(), IndicatorError> {
        dispatch!(self, ind => ind.set_length(length))
    }

    pub fn is_formed(&self) -> bool {
        dispatch!(self, ind => ind.is_formed())
    }

    pub fn measure(&self) -> Measure {
        dispatch!(self, ind => ind.measure())
    }

    pub fn reset(&mut self) {
        dispatch!(self, ind => ind.reset())
    }

    pub fn process_value(&mut self, input: &IndicatorValue) -> Result<IndicatorValue, IndicatorError> {
        dispatch!(self, ind => ind.process_value(input))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::value::{Payload, Phase};

    #[test]
    fn parses_list_with_defaults() {
        let configs = IndicatorConfig::list_from_json(
            r#"[{"kind":"relative_strength_index","length":14},{"kind":"correlation"}]"#,
        )
        .unwrap();
        assert_eq!(
            configs,
            vec![
                IndicatorConfig::with_length(IndicatorKind::RelativeStrengthIndex, 14),
                IndicatorConfig::new(IndicatorKind::Correlation),
            ]
        );

        let rsi = configs[0].build().unwrap();
        assert_eq!(rsi.kind(), IndicatorKind::RelativeStrengthIndex);
        assert_eq!(rsi.length(), 14);
        assert_eq!(rsi.measure(), Measure::Percent);

        let corr = configs[1].build().unwrap();
        assert_eq!(corr.length(), 20);
    }

    #[test]
    fn rejects_zero_length_and_unknown_kind() {
        let zero = IndicatorConfig::from_json(r#"{"kind":"covariance","length":0}"#).unwrap();
        assert!(matches!(
            zero.build(),
            Err(IndicatorError::InvalidLength { length: 0 })
        ));

        assert!(matches!(
            IndicatorConfig::from_json(r#"{"kind":"macd"}"#),
            Err(IndicatorError::Config(_))
        ));
    }

    #[test]
    fn process_value_checks_shape() {
        let mut rsi = IndicatorConfig::new(IndicatorKind::RelativeStrengthIndex)
            .build()
            .unwrap();
        let pair = IndicatorValue::pair(IndicatorId(0), 1.0, 2.0, Phase::Final);
        assert!(matches!(
            rsi.process_value(&pair),
            Err(IndicatorError::PayloadMismatch { .. })
        ));

        let mut corr = IndicatorConfig::with_length(IndicatorKind::Correlation, 3)
            .build()
            .unwrap();
        let out = corr.process_value(&pair).unwrap();
        assert_eq!(out.owner, corr.id());
        assert_eq!(out.payload, Payload::Scalar(0.0));
    }

    #[test]
    fn serializes_without_default_length() {
        let json = serde_json::to_string(&IndicatorConfig::new(IndicatorKind::Covariance)).unwrap();
        assert_eq!(json, r#"{"kind":"covariance"}"#);
    }
}
