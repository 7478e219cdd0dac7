// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use config::{Config, ConfigError, File};
use serde::Deserialize;
use std::path::Path;
use std::time::Duration;
use url::Url;

pub const DEFAULT_ENDPOINT: &str = "https://pkg.go.dev/search";

/// 应用程序配置设置
///
/// 包含搜索端点和输出格式配置
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    /// 搜索端点配置
    pub search: SearchSettings,
    /// 输出配置
    pub output: OutputSettings,
}

/// 搜索端点配置设置
#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    /// 搜索页面URL（不含查询参数）
    pub endpoint: Url,
    /// 请求使用的User-Agent
    pub user_agent: String,
    /// 单次请求超时时间（秒）
    pub timeout_secs: u64,
}

impl SearchSettings {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

/// 输出配置设置
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq)]
pub struct OutputSettings {
    /// 格式化输出的总行宽
    pub width: usize,
    /// 摘要和信息行的缩进
    pub indent: usize,
}

impl Default for OutputSettings {
    fn default() -> Self {
        Self {
            width: 80,
            indent: 4,
        }
    }
}

impl Settings {
    /// 使用内置默认值创建配置实例
    pub fn new() -> Result<Self, ConfigError> {
        Self::load(None)
    }

    /// 加载配置
    ///
    /// 从内置默认值开始，如果给出 `path` 则由该文件覆盖
    ///
    /// # Returns
    ///
    /// * `Ok(Settings)` - 成功加载的配置
    /// * `Err(ConfigError)` - 文件缺失、格式错误或取值无效
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let mut builder = Config::builder()
            .set_default("search.endpoint", DEFAULT_ENDPOINT)?
            .set_default(
                "search.user_agent",
                concat!("gofind/", env!("CARGO_PKG_VERSION")),
            )?
            .set_default("search.timeout_secs", 30)?
            .set_default("output.width", 80)?
            .set_default("output.indent", 4)?;

        if let Some(path) = path {
            builder = builder.add_source(File::from(path).required(true));
        }

        let settings: Settings = builder.build()?.try_deserialize()?;
        settings.validate()?;
        Ok(settings)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if !matches!(self.search.endpoint.scheme(), "http" | "https") {
            return Err(ConfigError::Message(format!(
                "search.endpoint must be an http(s) URL, got {}",
                self.search.endpoint
            )));
        }
        if self.search.timeout_secs == 0 {
            return Err(ConfigError::Message(
                "search.timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.output.width == 0 {
            return Err(ConfigError::Message(
                "output.width must be greater than zero".to_string(),
            ));
        }
        if self.output.indent >= self.output.width {
            return Err(ConfigError::Message(format!(
                "output.indent ({}) must be smaller than output.width ({})",
                self.output.indent, self.output.width
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
#[path = "settings_test.rs"]
mod tests;
