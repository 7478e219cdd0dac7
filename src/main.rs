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

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gofind::application::use_cases::search_packages::SearchPackagesUseCase;
use gofind::config::settings::Settings;
use gofind::domain::models::search_options::SearchOptions;
use gofind::domain::search::query::Query;
use gofind::infrastructure::search::HttpPageFetcher;
use gofind::utils::telemetry;
use tracing::debug;

/// Find Go packages via pkg.go.dev.
#[derive(Parser, Debug)]
#[command(name = "gofind")]
#[command(version)]
struct Cli {
    /// Search terms; a term containing spaces is searched as an exact phrase
    #[arg(required = true, value_name = "QUERY")]
    terms: Vec<String>,

    /// Load all result pages instead of only the first
    #[arg(short, long)]
    all: bool,

    /// Print tab-separated name, synopsis and info, one record per line
    #[arg(short, long)]
    raw: bool,

    /// Log request details to stderr
    #[arg(short, long)]
    verbose: bool,

    /// Path to a TOML settings file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,
}

/// 主函数
///
/// 参数错误时由 clap 以状态码 2 退出，搜索失败时以状态码 1 退出
#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    telemetry::init_telemetry(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("gofind: {:#}", e);
            ExitCode::from(1)
        }
    }
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    let settings = Settings::load(cli.config.as_deref())?;
    debug!(endpoint = %settings.search.endpoint, "Configuration loaded");

    let options = SearchOptions::new(cli.all, cli.raw);
    let query = Query::new(cli.terms);

    let fetcher = HttpPageFetcher::new(&settings.search)?;
    let use_case = SearchPackagesUseCase::new(fetcher, settings.output);

    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    use_case.execute(&query, &options, &mut out).await?;

    Ok(())
}
