// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 领域模型模块
///
/// 搜索记录与单次搜索调用的选项
pub mod search_options;
pub mod search_record;
