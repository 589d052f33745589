//! # 工作流编排模块
//!
//! 把位图解析、容量测定与编解码串联成完整的隐藏与提取流程。
//! 读写只发生在流的边界处，中间全部在内存中完成。

use crate::bitmap::Bitmap;
use crate::capacity;
use crate::codec;
use crate::error::{Result, StegError};
use std::io::{Read, Seek, Write};

/// 把载荷流的全部内容隐藏进位图流，并把结果位图写入目标流。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 位图流无法解析为有效的位图。
/// * 载荷流不可定位，或其长度超出图像的像素容量。
/// * 载荷流提供的字节少于其测定长度（此时尚未修改任何像素）。
/// * 结果位图写入目标流失败。
pub fn hide<B, P, W>(bitmap_src: &mut B, payload_src: &mut P, dest: &mut W) -> Result<()>
where
    B: Read,
    P: Read + Seek,
    W: Write,
{
    let mut bitmap = Bitmap::read_from(bitmap_src)?;

    let length = capacity::payload_len(payload_src)?;
    if !capacity::fits(bitmap.header.width, bitmap.header.height, length) {
        return Err(StegError::OversizedPayload {
            payload: length,
            capacity: bitmap.pixels.len() as u64,
        });
    }

    let payload = read_payload(payload_src, length)?;
    codec::hide(&mut bitmap, &payload)?;
    bitmap.write_to(dest)
}

/// 从位图流中提取隐藏的载荷并一次性写入目标流。
///
/// 载荷长度由头部的长度字段给出，提取过程不修改位图。
///
/// # Errors
///
/// 位图无法解析、长度字段损坏或目标流写入失败时返回错误。
pub fn extract<B, W>(bitmap_src: &mut B, dest: &mut W) -> Result<()>
where
    B: Read,
    W: Write,
{
    let bitmap = Bitmap::read_from(bitmap_src)?;
    let payload = codec::extract(&bitmap)?;
    dest.write_all(&payload)
        .map_err(|source| StegError::PayloadWrite { source })
}

// 先把载荷完整读入内存，之后才会触碰像素数据。
fn read_payload(source: &mut impl Read, length: u64) -> Result<Vec<u8>> {
    let len = usize::try_from(length).map_err(|_| StegError::Allocation { bytes: length })?;
    let mut payload = Vec::new();
    payload
        .try_reserve_exact(len)
        .map_err(|_| StegError::Allocation { bytes: length })?;
    payload.resize(len, 0);
    source
        .read_exact(&mut payload)
        .map_err(|source| StegError::PayloadRead {
            expected: length,
            source,
        })?;
    Ok(payload)
}
