//! # 命令处理逻辑模块
//!
//! 包含处理 `hide` 和 `extract` 子命令的高级业务逻辑。
//! 本模块负责协调文件 I/O、调用核心工作流以及向用户报告结果。

use crate::cli::{ExtractArgs, HideArgs};
use crate::workflow;
use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::io::Cursor;
use std::path::{Path, PathBuf};

/// 处理 'Hide' 命令的执行逻辑。
///
/// 负责读取图像与载荷文件、调用隐藏工作流把载荷写入像素低位，
/// 最后将结果图像写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `HideArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像或载荷文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 隐藏工作流失败（位图无效、容量不足、载荷读取不完整等）。
/// * 无法写入到目标图像文件。
pub fn handle_hide(args: HideArgs) -> Result<()> {
    let dest = match args.dest {
        Some(dest) => dest,
        None => default_hide_dest(&args.image)?,
    };
    ensure_writable(&dest, args.force)?;

    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let payload = fs::read(&args.file).with_context(|| {
        format!(
            "Unable to read payload file: {}",
            args.file.to_string_lossy().red().bold()
        )
    })?;

    let mut doctored = Vec::new();
    workflow::hide(
        &mut Cursor::new(picture),
        &mut Cursor::new(payload),
        &mut doctored,
    )
    .with_context(|| {
        format!(
            "Failed to hide {} inside {}",
            args.file.to_string_lossy().red().bold(),
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, doctored).with_context(|| {
        format!(
            "Unable to write to target image file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The file has been successfully hidden and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

/// 处理 'Extract' 命令的执行逻辑。
///
/// 负责读取经过隐写的图像文件、调用提取工作流还原隐藏的载荷，
/// 最后将载荷内容写入目标文件。
///
/// # Arguments
///
/// * `args` - 包含输入/输出路径的 `ExtractArgs` 结构体。
///
/// # Errors
///
/// 如果发生以下任一情况，将返回错误：
/// * 无法读取输入的图像文件。
/// * 输出文件已存在且未指定 `--force`。
/// * 提取工作流失败（位图无效、长度字段损坏等）。
/// * 无法写入到目标文件。
pub fn handle_extract(args: ExtractArgs) -> Result<()> {
    let dest = match args.dest {
        Some(dest) => dest,
        None => default_extract_dest(&args.image)?,
    };
    ensure_writable(&dest, args.force)?;

    let picture = fs::read(&args.image).with_context(|| {
        format!(
            "Unable to read image file: {}",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    let mut recovered = Vec::new();
    workflow::extract(&mut Cursor::new(picture), &mut recovered).with_context(|| {
        format!(
            "Failed to extract a hidden file from '{}'. \nThe image may not contain a hidden file or is corrupted.",
            args.image.to_string_lossy().red().bold()
        )
    })?;

    fs::write(&dest, recovered).with_context(|| {
        format!(
            "Unable to write to target file: {}",
            dest.to_string_lossy().red().bold()
        )
    })?;

    println!(
        "The hidden file has been successfully extracted and saved: {}",
        dest.to_string_lossy().green().bold()
    );

    Ok(())
}

// 缺省输出路径：与图像同目录、带 doctored_ 前缀的同名文件。
fn default_hide_dest(image: &Path) -> Result<PathBuf> {
    let name = image.file_name().with_context(|| {
        format!(
            "Invalid image path: {}",
            image.to_string_lossy().red().bold()
        )
    })?;
    Ok(image.with_file_name(format!("doctored_{}", name.to_string_lossy())))
}

// 缺省输出路径：与图像同目录、带 recovered_ 前缀的 .bin 文件。
fn default_extract_dest(image: &Path) -> Result<PathBuf> {
    let stem = image.file_stem().with_context(|| {
        format!(
            "Invalid image path: {}",
            image.to_string_lossy().red().bold()
        )
    })?;
    Ok(image.with_file_name(format!("recovered_{}.bin", stem.to_string_lossy())))
}

// 覆盖保护：目标已存在且未指定 --force 时拒绝写入。
fn ensure_writable(dest: &Path, force: bool) -> Result<()> {
    anyhow::ensure!(
        force || !dest.exists(),
        "Output file already exists: {}. \nPass --force to overwrite it.",
        dest.to_string_lossy().red().bold()
    );
    Ok(())
}
