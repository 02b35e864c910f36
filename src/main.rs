use clangd_gen::utils::log::{log, LogLevel};
use clangd_gen::{clangd, pkg_config};
use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "clangd_gen",
    version,
    about = "Generates a .clangd compile flags block from pkg-config",
    after_help = "Environment variables:\n  CLANGD_GEN_LOG_LEVEL\n\t\tSet the log level\n\t\tValid values are: Debug, Info, Log, Warn, Error"
)]
struct Cli {}

fn main() {
    Cli::parse();

    let (cflags, success) = pkg_config::cflags(pkg_config::PKG_LIBS);
    if !success {
        log(LogLevel::Error, "pkg-config query failed");
        std::process::exit(1);
    }
    print!("{}", clangd::render_config(&clangd::format_flags(&cflags)));
}
