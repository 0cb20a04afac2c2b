//! Segment display drivers

pub mod frame_buffer;

pub use frame_buffer::FrameBuffer;
