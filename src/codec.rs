//! 载荷字节与像素通道之间的拆分与重组：4 位进蓝、2 位进绿、2 位进红。

use crate::bitmap::Bitmap;
use crate::error::{Result, StegError};

/// 把一个载荷字节拆成 (蓝, 绿, 红) 三个通道片段。
pub fn split_byte(byte: u8) -> (u8, u8, u8) {
    (byte >> 4, (byte & 0b0000_1100) >> 2, byte & 0b0000_0011)
}

/// 由三个通道片段重组出原始载荷字节。
pub fn merge_fragments(blue: u8, green: u8, red: u8) -> u8 {
    (blue << 4) | (green << 2) | red
}

/// 把载荷逐字节写入像素的低位，并把载荷长度记入头部的长度字段。
///
/// 容量不足时在修改任何像素之前返回 [`StegError::OversizedPayload`]，
/// 因此失败的调用不会留下写了一半的图像。
pub fn hide(bitmap: &mut Bitmap, payload: &[u8]) -> Result<()> {
    // 长度字段只有 4 字节，可表示的载荷长度同样受它约束
    let capacity = bitmap.pixels.len().min(u32::MAX as usize);
    if payload.len() > capacity {
        return Err(StegError::OversizedPayload {
            payload: payload.len() as u64,
            capacity: capacity as u64,
        });
    }

    bitmap.header.hidden_len = payload.len() as u32;

    for (pixel, &byte) in bitmap.pixels.iter_mut().zip(payload) {
        let (blue, green, red) = split_byte(byte);
        pixel.blue = (pixel.blue & 0xF0) | blue;
        pixel.green = (pixel.green & 0xFC) | green;
        pixel.red = (pixel.red & 0xFC) | red;
    }
    Ok(())
}

/// 按头部长度字段从像素低位还原载荷，不修改位图本身。
///
/// # Errors
///
/// 长度字段超出实际像素数量时返回 [`StegError::CorruptHeader`]。
pub fn extract(bitmap: &Bitmap) -> Result<Vec<u8>> {
    let length = bitmap.header.hidden_len as usize;
    if length > bitmap.pixels.len() {
        return Err(StegError::CorruptHeader {
            length: length as u64,
            pixels: bitmap.pixels.len() as u64,
        });
    }

    let mut payload = Vec::new();
    payload
        .try_reserve_exact(length)
        .map_err(|_| StegError::Allocation {
            bytes: length as u64,
        })?;
    for pixel in &bitmap.pixels[..length] {
        payload.push(merge_fragments(
            pixel.blue & 0x0F,
            pixel.green & 0x03,
            pixel.red & 0x03,
        ));
    }
    Ok(payload)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bitmap::{BitmapHeader, Pixel};
    use crate::constants::{BMP_HEADER_SIZE, BMP_MAGIC, INFO_HEADER_SIZE, PIXEL_SIZE};

    fn test_bitmap(count: usize) -> Bitmap {
        let width = count as i32;
        let image_size = (width as i64 * PIXEL_SIZE as i64 + (width % 4) as i64) as u32;
        Bitmap {
            header: BitmapHeader {
                magic: BMP_MAGIC,
                file_size: BMP_HEADER_SIZE as u32 + image_size,
                reserved1: 0,
                reserved2: 0,
                data_offset: BMP_HEADER_SIZE as u32,
                header_size: INFO_HEADER_SIZE,
                width,
                height: 1,
                planes: 1,
                bit_count: 24,
                compression: 0,
                image_size,
                x_pels_per_meter: 0,
                y_pels_per_meter: 0,
                colors_used: 0,
                hidden_len: 0,
            },
            pixels: vec![
                Pixel {
                    blue: 0x55,
                    green: 0xAA,
                    red: 0xFF
                };
                count
            ],
        }
    }

    #[test]
    fn split_0xab_into_channel_fragments() {
        let (blue, green, red) = split_byte(0xAB);
        assert_eq!(blue, 0xA);
        assert_eq!(green, 0x2);
        assert_eq!(red, 0x3);
        assert_eq!(merge_fragments(blue, green, red), 0xAB);
    }

    #[test]
    fn split_merge_roundtrips_every_byte() {
        for byte in 0..=u8::MAX {
            let (blue, green, red) = split_byte(byte);
            assert_eq!(merge_fragments(blue, green, red), byte, "byte {byte:#04x}");
        }
    }

    #[test]
    fn hide_then_extract_recovers_payload() {
        let mut bitmap = test_bitmap(16);
        let payload = [0x00, 0xFF, 0xAB, 0x12, 0x80, 0x01];

        hide(&mut bitmap, &payload).unwrap();
        assert_eq!(bitmap.header.hidden_len, 6);
        assert_eq!(extract(&bitmap).unwrap(), payload);
    }

    #[test]
    fn hide_only_touches_the_two_low_bits_of_green_and_red() {
        let mut bitmap = test_bitmap(1);
        hide(&mut bitmap, &[0xAB]).unwrap();

        let pixel = bitmap.pixels[0];
        // 0x55 = 0101_0101, 高 4 位保留，低 4 位换成 0xA
        assert_eq!(pixel.blue, 0x5A);
        // 0xAA = 1010_1010, 低 2 位换成 0b10
        assert_eq!(pixel.green, 0xAA);
        // 0xFF 的低 2 位换成 0b11
        assert_eq!(pixel.red, 0xFF);
    }

    #[test]
    fn hide_accepts_payload_equal_to_pixel_count() {
        let mut bitmap = test_bitmap(8);
        let payload = vec![0x5A; 8];
        hide(&mut bitmap, &payload).unwrap();
        assert_eq!(extract(&bitmap).unwrap(), payload);
    }

    #[test]
    fn hide_rejects_payload_one_byte_over_capacity_without_mutation() {
        let mut bitmap = test_bitmap(8);
        let untouched = bitmap.clone();
        let payload = vec![0x5A; 9];

        let err = hide(&mut bitmap, &payload).unwrap_err();
        match err {
            StegError::OversizedPayload { payload, capacity } => {
                assert_eq!(payload, 9);
                assert_eq!(capacity, 8);
            }
            other => panic!("expected OversizedPayload, got {other:?}"),
        }
        assert_eq!(bitmap, untouched, "a rejected hide must not modify the image");
    }

    #[test]
    fn extract_rejects_length_beyond_pixel_count() {
        let mut bitmap = test_bitmap(4);
        bitmap.header.hidden_len = 5;

        let err = extract(&bitmap).unwrap_err();
        assert!(matches!(
            err,
            StegError::CorruptHeader {
                length: 5,
                pixels: 4
            }
        ));
    }

    #[test]
    fn extract_twice_yields_identical_output() {
        let mut bitmap = test_bitmap(16);
        hide(&mut bitmap, b"repeatable").unwrap();

        let before = bitmap.clone();
        let first = extract(&bitmap).unwrap();
        let second = extract(&bitmap).unwrap();
        assert_eq!(first, second);
        assert_eq!(bitmap, before, "extraction must not modify the image");
    }
}
