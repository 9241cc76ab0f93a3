//! USI エンジン本体。標準入力からコマンドを読み、標準出力に応答する。
//!
//! 標準出力はプロトコル専用なので、ログは標準エラー出力またはファイルに出す。

use std::path::PathBuf;

use anyhow::Context as _;
use log::{info, LevelFilter};
use structopt::StructOpt;

use usi_sfen::usi::Usi;

#[derive(Debug, StructOpt)]
struct Opt {
    /// ログの出力先ファイル。省略時は標準エラー出力。
    #[structopt(long, parse(from_os_str))]
    log_file: Option<PathBuf>,

    /// ログレベル (off, error, warn, info, debug, trace)。
    #[structopt(long, default_value = "info")]
    log_level: LevelFilter,

    /// `id name` で返すエンジン名。
    #[structopt(long, default_value = "hroc135")]
    name: String,

    /// `id author` で返す作者名。
    #[structopt(long, default_value = "hroc135")]
    author: String,
}

fn main() -> anyhow::Result<()> {
    let opt = Opt::from_args();

    init_logger(&opt)?;

    info!("{} started", opt.name);

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();

    let mut usi = Usi::new(stdout.lock(), opt.name, opt.author);
    usi.run(stdin.lock())?;

    Ok(())
}

fn init_logger(opt: &Opt) -> anyhow::Result<()> {
    let dispatch = fern::Dispatch::new()
        .format(|out, message, record| {
            out.finish(format_args!("[{}] {}", record.level(), message))
        })
        .level(opt.log_level);

    let dispatch = match &opt.log_file {
        Some(path) => dispatch.chain(
            fern::log_file(path)
                .with_context(|| format!("cannot open log file: {}", path.display()))?,
        ),
        None => dispatch.chain(std::io::stderr()),
    };

    dispatch.apply()?;

    Ok(())
}
