use clap::Parser;
use dotenv::dotenv;
use human_panic::setup_panic;
use std::process::ExitCode;
use tracing::{debug, error};

// 从 lib.rs 导入模块
use rust_attendance_next::cli::{self, Cli};
use rust_attendance_next::config::AppConfig;
use rust_attendance_next::pages::error_notice;
use rust_attendance_next::runtime::lifetime;

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();

    let start = chrono::Utc::now();

    // 先解析参数，--help / --version 不需要配置
    let args = Cli::parse();

    // 初始化配置
    setup_panic!();
    if let Err(e) = AppConfig::init() {
        eprintln!("Failed to initialize configuration: {e}");
        return ExitCode::FAILURE;
    }
    let config = AppConfig::get();

    // 初始化日志，输出到 stderr，避免和表格混在一起
    let (non_blocking_writer, _guard) = tracing_appender::non_blocking(std::io::stderr());
    let filter = tracing_subscriber::EnvFilter::new(&config.app.log_level);
    let tracing_format = tracing_subscriber::fmt::format()
        .with_level(true)
        .with_ansi(true);

    let tracing_builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(non_blocking_writer)
        .event_format(tracing_format);

    if config.is_development() {
        tracing_builder
            .with_file(true)
            .with_line_number(true)
            .init();
    } else {
        tracing_builder.json().init();
    }

    debug!(
        "Starting {} v{} against {}",
        env!("CARGO_PKG_NAME"),
        env!("CARGO_PKG_VERSION"),
        config.api.base_url
    );

    let mut context = match lifetime::startup::prepare_client_startup().await {
        Ok(context) => context,
        Err(e) => {
            error!("Startup failed: {}", e);
            eprintln!("{}", error_notice(&e));
            return ExitCode::FAILURE;
        }
    };

    debug!(
        "Startup completed in {} ms",
        chrono::Utc::now()
            .signed_duration_since(start)
            .num_milliseconds()
    );

    match cli::run(&mut context, args.command).await {
        Ok(rendered) => {
            print!("{rendered}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            #[cfg(debug_assertions)]
            debug!("{}", e.format_colored());
            eprintln!("{}", error_notice(&e));
            ExitCode::FAILURE
        }
    }
}
