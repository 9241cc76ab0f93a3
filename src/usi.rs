//! USI プロトコルの行単位ディスパッチャ。
//!
//! 思考部は存在しないので、go に対しては常に投了する。

use std::io::{BufRead, Write};
use std::ops::ControlFlow;

use anyhow::Context as _;
use log::{debug, info, warn};

use crate::position::Position;
use crate::sfen::{sfen_decode_position_command, sfen_encode_position_command};

const OPTION_PONDER: &str = "USI_Ponder";
const OPTION_HASH: &str = "USI_Hash";

/// USI エンジンのコマンド処理部。
///
/// 応答は 1 行ごとに `out` へ書き込み、直ちに flush する。
#[derive(Debug)]
pub struct Usi<W> {
    out: W,
    name: String,
    author: String,
    position: Position,
}

impl<W: Write> Usi<W> {
    /// エンジン名と作者名を指定してコマンド処理部を作る。初期局面は平手。
    pub fn new(out: W, name: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            out,
            name: name.into(),
            author: author.into(),
            position: Position::startpos(),
        }
    }

    /// 現在の局面を返す。
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// 出力先を取り出す。
    pub fn into_inner(self) -> W {
        self.out
    }

    /// 入力が尽きるか quit を受け取るまでコマンドを処理する。
    ///
    /// 入出力エラー以外でエラーを返すことはない。
    pub fn run<R: BufRead>(&mut self, input: R) -> anyhow::Result<()> {
        for line in input.lines() {
            let line = line.context("cannot read command line")?;
            if self.do_line(&line)?.is_break() {
                info!("quit");
                return Ok(());
            }
        }

        info!("input closed");

        Ok(())
    }

    /// 1 行分のコマンドを処理する。quit を受け取った場合は `ControlFlow::Break` を返す。
    pub fn do_line(&mut self, line: &str) -> anyhow::Result<ControlFlow<()>> {
        let tokens: Vec<_> = line.split_ascii_whitespace().collect();
        if tokens.is_empty() {
            return Ok(ControlFlow::Continue(()));
        }

        let cmd = tokens[0];
        let args = &tokens[1..];

        self.do_command(cmd, args)
    }

    fn do_command(&mut self, cmd: &str, args: &[&str]) -> anyhow::Result<ControlFlow<()>> {
        match cmd {
            "usi" => self.do_command_usi()?,
            "isready" => self.respond("readyok")?,
            "usinewgame" | "setoption" | "stop" | "ponderhit" | "gameover" => {}
            "position" => self.do_command_position(args),
            "go" => self.respond("bestmove resign")?,
            "quit" => return Ok(ControlFlow::Break(())),
            _ => self.respond(format_args!("info string Unsupported command: {}", cmd))?,
        }

        Ok(ControlFlow::Continue(()))
    }

    fn do_command_usi(&mut self) -> anyhow::Result<()> {
        let name = format!("id name {}", self.name);
        let author = format!("id author {}", self.author);

        self.respond(name)?;
        self.respond(author)?;
        self.respond(format_args!(
            "option name {} type check default true",
            OPTION_PONDER
        ))?;
        self.respond(format_args!(
            "option name {} type spin default 256",
            OPTION_HASH
        ))?;
        self.respond("usiok")
    }

    /// 局面を設定する。デコードに失敗した場合は警告ログを出し、元の局面を保つ。
    fn do_command_position(&mut self, args: &[&str]) {
        match sfen_decode_position_command(args.join(" ")) {
            Ok((pos, mvs)) => {
                if !mvs.is_empty() {
                    warn!("moves are not supported, ignored: {}", mvs.join(" "));
                }
                self.position = pos;
                debug!("position: {}", sfen_encode_position_command(&self.position));
                debug!("\n{}", self.position);
            }
            Err(e) => warn!("position rejected, keeping the previous one: {}", e),
        }
    }

    fn respond(&mut self, line: impl std::fmt::Display) -> anyhow::Result<()> {
        writeln!(self.out, "{}", line).context("cannot write response")?;
        self.out.flush().context("cannot flush response")?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::shogi::*;

    fn usi() -> Usi<Vec<u8>> {
        Usi::new(Vec::new(), "name", "author")
    }

    #[test]
    fn test_position_keeps_previous_on_error() {
        let mut usi = usi();

        usi.do_line("position sfen 4k4/9/9/9/9/9/9/9/4K4 w P 5")
            .unwrap();
        let pos = usi.position().clone();
        assert_eq!(pos.side_to_move(), WHITE);

        usi.do_line("position sfen 4k4/9/9/9/9/9/9/9/4K3 b - 1")
            .unwrap();
        usi.do_line("position sfen 4k4/9/9/9/9/9/9/9/4K4 b - x")
            .unwrap();
        assert_eq!(usi.position(), &pos);

        // 失敗してもプロトコル上の出力はない。
        assert!(usi.into_inner().is_empty());
    }

    #[test]
    fn test_quit() {
        let mut usi = usi();

        assert!(usi.do_line("quit").unwrap().is_break());
        assert!(usi.do_line("   ").unwrap().is_continue());
        assert!(usi.do_line("stop").unwrap().is_continue());
    }
}
