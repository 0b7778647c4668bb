//! 展示元数据, 每种指标一行
//!
//! 计算模块不读取此表。

use serde::Serialize;

use crate::indicators::{IndicatorKind, Measure};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Trend,
    Volatility,
    Statistics,
    Oscillator,
}

/// 指标输入的数据形状
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum InputShape {
    Scalar,
    Pair,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Descriptor {
    pub kind: IndicatorKind,
    pub name: &'static str,
    pub short_name: &'static str,
    pub category: Category,
    pub input: InputShape,
    pub measure: Measure,
    /// 文档相对路径
    pub doc: &'static str,
    /// 不在价格图上显示
    pub chart_hidden: bool,
}

static DESCRIPTORS: [Descriptor; 5] = [
    Descriptor {
        kind: IndicatorKind::SmoothedMovingAverage,
        name: "Smoothed Moving Average",
        short_name: "SMMA",
        category: Category::Trend,
        input: InputShape::Scalar,
        measure: Measure::Raw,
        doc: "indicators/smma.md",
        chart_hidden: false,
    },
    Descriptor {
        kind: IndicatorKind::StandardDeviation,
        name: "Standard Deviation",
        short_name: "STDEV",
        category: Category::Volatility,
        input: InputShape::Scalar,
        measure: Measure::Raw,
        doc: "indicators/std_dev.md",
        chart_hidden: false,
    },
    Descriptor {
        kind: IndicatorKind::Covariance,
        name: "Covariance",
        short_name: "COV",
        category: Category::Statistics,
        input: InputShape::Pair,
        measure: Measure::Raw,
        doc: "indicators/covariance.md",
        chart_hidden: true,
    },
    Descriptor {
        kind: IndicatorKind::Correlation,
        name: "Correlation",
        short_name: "COR",
        category: Category::Statistics,
        input: InputShape::Pair,
        measure: Measure::Raw,
        doc: "indicators/correlation.md",
        chart_hidden: true,
    },
    Descriptor {
        kind: IndicatorKind::RelativeStrengthIndex,
        name: "Relative Strength Index",
        short_name: "RSI",
        category: Category::Oscillator,
        input: InputShape::Scalar,
        measure: Measure::Percent,
        doc: "indicators/rsi.md",
        chart_hidden: false,
    },
];

pub fn descriptor(kind: IndicatorKind) -> &'static Descriptor {
    match kind {
        IndicatorKind::SmoothedMovingAverage => &DESCRIPTORS[0],
        IndicatorKind::StandardDeviation => &DESCRIPTORS[1],
        IndicatorKind::Covariance => &DESCRIPTORS[2],
        IndicatorKind::Correlation => &DESCRIPTORS[3],
        IndicatorKind::RelativeStrengthIndex => &DESCRIPTORS[4],
    }
}

pub fn descriptors() -> &'static [Descriptor] {
    &DESCRIPTORS
}
