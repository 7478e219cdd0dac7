// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 基础设施层单元测试
///
/// 测试分页聚合等基础设施组件
pub mod search;
