//! # bmp_hide 库
//!
//! 本库包含 BMP 隐写工具的核心逻辑：
//! 位图容器解析、容量测定、4/2/2 通道编解码与工作流编排。

// 声明库包含的所有模块。

pub mod bitmap;
pub mod capacity;
pub mod cli;
pub mod codec;
pub mod constants;
pub mod error;
pub mod handler;
pub mod workflow;
