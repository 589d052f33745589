//! # 命令行接口模块
//!
//! 使用 `clap` 定义了程序的命令行结构，包括子命令和参数。
//! 所有用户通过命令行与程序交互的入口点都在此模块中定义。

use clap::Parser;
use std::path::PathBuf;

/// 一款把任意文件的字节隐藏进 24 位 BMP 图像像素通道低位的命令行隐写工具。
#[derive(Parser, Debug)]
#[command(
    version,
    about,
    long_about = "一款把任意文件的字节隐藏进 24 位 BMP 图像像素通道低位的命令行隐写工具。"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令：hide (隐藏) 和 extract (提取)。
#[derive(Parser, Debug)]
pub enum Commands {
    /// 把一个文件的全部字节隐藏进 24 位 BMP 图像。
    Hide(HideArgs),

    /// 从经过隐写的 BMP 图像中提取隐藏的文件。
    Extract(ExtractArgs),
}

/// 'hide' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct HideArgs {
    /// 用于隐写的输入 BMP 图像文件路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 要隐藏的文件路径，内容按原始字节处理。
    #[arg(short, long)]
    pub file: PathBuf,

    /// 隐写完成后，保存结果图像的输出路径。
    /// 缺省时在图像同目录下生成带 doctored_ 前缀的文件。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 目标文件已存在时直接覆盖。
    #[arg(long)]
    pub force: bool,
}

/// 'extract' 命令所需的参数。
#[derive(Parser, Debug)]
pub struct ExtractArgs {
    /// 已隐藏文件数据的 BMP 图像路径。
    #[arg(short, long)]
    pub image: PathBuf,

    /// 提取后保存载荷内容的输出路径。
    /// 缺省时在图像同目录下生成带 recovered_ 前缀的 .bin 文件。
    #[arg(short, long)]
    pub dest: Option<PathBuf>,

    /// 目标文件已存在时直接覆盖。
    #[arg(long)]
    pub force: bool,
}
