/// BMP 文件的标准头部大小 (字节)。
/// 由 14 字节文件头与 40 字节信息头组成，像素数据紧随其后。
pub const BMP_HEADER_SIZE: usize = 54;

/// BMP 信息头 (BITMAPINFOHEADER) 的大小 (字节)。
pub const INFO_HEADER_SIZE: u32 = 40;

/// 单个像素占用的字节数，按蓝、绿、红的顺序排列，无透明通道。
pub const PIXEL_SIZE: usize = 3;

/// BMP 文件开头的魔数标记。
pub const BMP_MAGIC: [u8; 2] = *b"BM";
