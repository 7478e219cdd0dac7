// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用程序模块
///
/// 将查询、分页聚合与渲染串联为搜索用例
pub mod application;

/// 配置模块
///
/// 处理搜索端点与输出格式的配置
pub mod config;

/// 领域模块
///
/// 包含搜索记录、查询编码和页面来源接口
pub mod domain;

/// 基础设施模块
///
/// HTTP 抓取、HTML 解析与分页聚合
pub mod infrastructure;

/// 表示层模块
///
/// 输出搜索结果
pub mod presentation;

/// 工具模块
///
/// 提供通用的工具函数和辅助功能
pub mod utils;
