//! Welford 增量统计
//!
//! 以均值为中心累积离差, 支持滑动窗口的增/删。
//! 常数序列的离差恒为 0, 因此方差/协方差精确为 0。

/// 单变量: 均值 + 离差平方和 (M2)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Moments {
    count: usize,
    mean: f64,
    m2: f64,
}

impl Moments {
    /// Welford 算法: 添加值
    pub fn add(&mut self, x: f64) {
        self.count += 1;
        let delta = x - self.mean;
        self.mean += delta / self.count as f64;
        self.m2 += delta * (x - self.mean);
    }

    /// Welford 算法: 移除值 (滑动窗口)
    pub fn remove(&mut self, x: f64) {
        if self.count <= 1 {
            *self = Self::default();
            return;
        }

        let delta = x - self.mean;
        self.count -= 1;
        self.mean -= delta / self.count as f64;
        self.m2 -= delta * (x - self.mean);

        // 防止浮点误差导致负数
        if self.m2 < 0.0 {
            self.m2 = 0.0;
        }
    }

    /// 总体方差 (空时为 0)
    pub fn variance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.m2 / self.count as f64
        }
    }
}

/// 双变量: 两个均值 + 交叉离差和 (C)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct CoMoments {
    count: usize,
    mean_x: f64,
    mean_y: f64,
    c: f64,
}

impl CoMoments {
    pub fn add(&mut self, x: f64, y: f64) {
        self.count += 1;
        let dx = x - self.mean_x;
        let n = self.count as f64;
        self.mean_x += dx / n;
        self.mean_y += (y - self.mean_y) / n;
        self.c += dx * (y - self.mean_y);
    }

    pub fn remove(&mut self, x: f64, y: f64) {
        if self.count <= 1 {
            *self = Self::default();
            return;
        }

        let dx = x - self.mean_x;
        let dy = y - self.mean_y;
        self.count -= 1;
        let n = self.count as f64;
        self.mean_x -= dx / n;
        self.mean_y -= dy / n;
        self.c -= dy * (x - self.mean_x);
    }

    /// 总体协方差 (空时为 0)
    pub fn covariance(&self) -> f64 {
        if self.count == 0 {
            0.0
        } else {
            self.c / self.count as f64
        }
    }
}
