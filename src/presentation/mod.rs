// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 表示层模块
///
/// 将搜索记录渲染为原始或格式化文本
pub mod renderer;
