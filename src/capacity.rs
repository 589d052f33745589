//! # 容量测定模块
//!
//! 先测定载荷流的总字节数，再以像素数量为上限判断图像能否容纳。

use crate::error::{Result, StegError};
use std::io::{Seek, SeekFrom};

/// 通过定位到流末尾获取载荷的总字节数，随后把流重置回起始位置。
///
/// # Errors
///
/// 流不可定位时返回 [`StegError::Seek`]。
pub fn payload_len(stream: &mut impl Seek) -> Result<u64> {
    let length = stream
        .seek(SeekFrom::End(0))
        .map_err(|source| StegError::Seek { source })?;
    stream
        .seek(SeekFrom::Start(0))
        .map_err(|source| StegError::Seek { source })?;
    Ok(length)
}

/// 判断 `width * height` 个像素是否足以容纳 `payload_len` 个字节。
/// 每个像素恰好承载一个载荷字节，因此该界限是精确的。
pub fn fits(width: i32, height: i32, payload_len: u64) -> bool {
    let pixels = i64::from(width) * i64::from(height);
    pixels >= 0 && pixels as u64 >= payload_len
}
