/*
    Copyright 2025 MydriaTech AB

    Licensed under the Apache License 2.0 with Free world makers exception
    1.0.0 (the "License"); you may not use this file except in compliance with
    the License. You should have obtained a copy of the License with the source
    or binary distribution in file named

        LICENSE-Apache-2.0-with-FWM-Exception-1.0.0

    Unless required by applicable law or agreed to in writing, software
    distributed under the License is distributed on an "AS IS" BASIS,
    WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
    See the License for the specific language governing permissions and
    limitations under the License.
*/

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![doc = include_str!("../README.md")]

use signalbridge_core::AppConfig;
use signalbridge_core::SignalBridge;
use std::process::ExitCode;
use tokio::io::AsyncReadExt;

/// Application main entrypoint.
fn main() -> ExitCode {
    if let Err(e) = init_logger() {
        println!("Failed to initialize logging: {e:?}");
        return ExitCode::FAILURE;
    }
    #[cfg(feature = "tracing")]
    let _guard = {
        // Enable tracing via the RUST_LOG environment variable. Example:
        //
        // ```
        // RUST_LOG="reqwest=trace,hyper_util=debug"
        // ```
        let (non_blocking, guard) = tracing_appender::non_blocking(std::io::stdout());
        tracing_subscriber::fmt()
            .with_max_level(tracing::Level::TRACE)
            .with_env_filter(tracing_subscriber::filter::EnvFilter::from_default_env())
            .with_writer(non_blocking)
            .init();
        guard
    };
    let app_config = match AppConfig::new(env!("CARGO_PKG_NAME")) {
        Ok(app_config) => app_config,
        Err(e) => {
            log::error!("Failed to load configuration: {e}");
            return ExitCode::FAILURE;
        }
    };
    let exchange_file = std::env::args().nth(1);
    match tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
    {
        Ok(runtime) => runtime.block_on(run_async(app_config, exchange_file)),
        Err(e) => {
            log::error!("Failed to start async runtime: {e}");
            ExitCode::FAILURE
        }
    }
}

/// Initialize the logging system and apply filters.
fn init_logger() -> Result<(), log::SetLoggerError> {
    env_logger::builder()
        // Set default log level
        .filter_level(log::LevelFilter::Info)
        // Customize logging for dependencies
        .filter(Some("hyper_util"), log::LevelFilter::Info)
        .filter(Some("reqwest"), log::LevelFilter::Info)
        .filter(Some("rustls"), log::LevelFilter::Info)
        .filter(Some("signalbridge_core"), log::LevelFilter::Debug)
        .write_style(env_logger::fmt::WriteStyle::Auto)
        .target(env_logger::fmt::Target::Stdout)
        .is_test(false)
        .parse_env(
            env_logger::Env::new()
                .filter("LOG_LEVEL")
                .write_style("LOG_STYLE"),
        )
        .try_init()
}

/// Async code entry point.
async fn run_async(app_config: AppConfig, exchange_file: Option<String>) -> ExitCode {
    let document = match read_document(exchange_file.as_deref()).await {
        Ok(document) => document,
        Err(e) => {
            log::error!("Failed to read exchange document: {e}");
            return ExitCode::FAILURE;
        }
    };
    let res = match SignalBridge::new(&app_config).await {
        Ok(bridge) => bridge.process_document(&document).await,
        Err(e) => Err(e),
    };
    match res {
        Ok(execution) => {
            log::info!(
                "Signaled execution '{}' of process instance '{}'.",
                execution.get_id(),
                execution.get_process_instance_id()
            );
            ExitCode::SUCCESS
        }
        Err(e) => {
            log::error!("{e}");
            ExitCode::FAILURE
        }
    }
}

/// Read the exchange document from a file or standard input.
async fn read_document(exchange_file: Option<&str>) -> std::io::Result<String> {
    if let Some(exchange_file) = exchange_file {
        tokio::fs::read_to_string(exchange_file).await
    } else {
        let mut document = String::new();
        tokio::io::stdin().read_to_string(&mut document).await?;
        Ok(document)
    }
}
