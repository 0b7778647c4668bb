pub mod moments;
pub mod ring_buffer;

pub use moments::{CoMoments, Moments};
pub use ring_buffer::RingBuffer;
