// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 搜索领域模块
///
/// 定义搜索相关的领域模型和核心业务逻辑
/// 包含查询编码、页面来源接口和结构化文档接口
pub mod document;
pub mod engine;
pub mod query;
