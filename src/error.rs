//! # 错误类型模块
//!
//! 定义解析、容量检查、编解码与序列化各环节的统一错误类型。

use crate::constants::BMP_HEADER_SIZE;
use std::io;
use thiserror::Error;

/// 本库操作的统一 Result 别名。
pub type Result<T> = std::result::Result<T, StegError>;

/// 隐写流程中可能出现的全部错误。
#[derive(Debug, Error)]
pub enum StegError {
    #[error("bitmap header truncated: expected {expected} bytes", expected = BMP_HEADER_SIZE)]
    TruncatedHeader { source: io::Error },

    #[error("declared image size {declared} does not match the computed size {computed}")]
    SizeMismatch { declared: u32, computed: i64 },

    #[error("bitmap pixel data truncated: expected {expected} bytes")]
    TruncatedBody { expected: u64, source: io::Error },

    #[error("unable to determine the payload length: the stream is not seekable")]
    Seek { source: io::Error },

    #[error("payload of {payload} bytes exceeds the image capacity of {capacity} bytes")]
    OversizedPayload { payload: u64, capacity: u64 },

    #[error("payload stream ended before {expected} bytes could be read")]
    PayloadRead { expected: u64, source: io::Error },

    #[error("failed to write the bitmap header")]
    HeaderWrite { source: io::Error },

    #[error("failed to write the bitmap pixel data")]
    BodyWrite { source: io::Error },

    #[error("failed to write the recovered payload")]
    PayloadWrite { source: io::Error },

    #[error("embedded payload length {length} exceeds the pixel count {pixels}")]
    CorruptHeader { length: u64, pixels: u64 },

    #[error("failed to reserve {bytes} bytes of buffer memory")]
    Allocation { bytes: u64 },
}
