use optional::{args::Args, config::Config, summary::summarize};
use std::process;
use tracing::{error, info};

fn init_logging(args: &Args) {
    let builder = tracing_subscriber::fmt()
        .with_ansi(false)
        .with_line_number(false);

    // 如果启用调试模式，输出调试信息，否则只输出 info 及以上级别
    if args.debug {
        builder.with_max_level(tracing::Level::DEBUG)
    } else {
        builder.with_max_level(tracing::Level::INFO)
    }
    .init();
}

// 程序入口
fn main() {
    // 解析命令行参数
    let args = Args::parse_args();

    // 初始化日志
    init_logging(&args);

    // 加载记录文件
    let config = match Config::from_file(&args.config) {
        Ok(config) => {
            info!("Successfully loaded record file: {:?}", args.config);
            config
        }
        Err(e) => {
            error!("Failed to load record file: {}", e);
            process::exit(1);
        }
    };

    // 如果是测试模式，成功验证后退出
    if args.test_config {
        info!("Record file validated successfully");
        return;
    }

    for record in &config.records {
        match summarize(record, &config.defaults, args.require_position) {
            Ok(summary) => info!(
                name = %summary.name,
                email = %summary.email,
                position = %summary.position,
                email_valid = summary.email_valid,
                container = %summary.position_display,
                "Resolved record"
            ),
            Err(e) => {
                error!("Failed to resolve record: {}", e);
                process::exit(1);
            }
        }
    }
}
