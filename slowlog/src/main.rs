use clap::Parser;
use slowlog_core::cli::{self, SlowlogArgs};
use slowlog_core::logging::{LogFormat, init_logging};

#[derive(Parser, Debug)]
#[command(
    name = "slowlog",
    version,
    about = "Slowlog: extract, deduplicate and sort Redis slow-log records"
)]
struct Cli {
    #[command(flatten)]
    args: SlowlogArgs,

    /// Format of diagnostic logs on stderr (level via RUST_LOG)
    #[arg(long, value_enum, default_value_t = LogFormat::Pretty)]
    log_format: LogFormat,
}

fn main() {
    let cli = Cli::parse();

    init_logging(cli.log_format);

    if let Err(err) = cli::run(&cli.args) {
        cli::print_error(&err);
        std::process::exit(1);
    }
}
