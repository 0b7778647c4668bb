//! 定长环形缓冲区
//!
//! 滑动窗口统计的存储层: 固定容量, 满时覆盖最旧值。

use core::num::NonZeroUsize;

/// 定长窗口 (满时覆盖最旧值)
///
/// `push` 返回被覆盖的旧值, 调用方据此从增量统计中移除。
#[derive(Debug, Clone)]
pub struct RingBuffer<T: Copy + Default> {
    data: Vec<T>,
    capacity: usize,
    head: usize, // 下一个写入位置
    len: usize,
}

impl<T: Copy + Default> RingBuffer<T> {
    pub fn new(capacity: NonZeroUsize) -> Self {
        let capacity = capacity.get();
        Self {
            data: vec![T::default(); capacity],
            capacity,
            head: 0,
            len: 0,
        }
    }

    /// 添加值, 已满时返回被覆盖的最旧值
    #[inline]
    pub fn push(&mut self, value: T) -> Option<T> {
        let evicted = self.evicting();
        self.data[self.head] = value;
        self.head = (self.head + 1) % self.capacity;
        if self.len < self.capacity {
            self.len += 1;
        }
        evicted
    }

    /// 下一次 `push` 将覆盖的值 (未满时为 `None`)
    #[inline]
    pub fn evicting(&self) -> Option<T> {
        if self.is_full() {
            Some(self.data[self.head])
        } else {
            None
        }
    }

    /// 当前长度
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// 是否已满
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len == self.capacity
    }
}
