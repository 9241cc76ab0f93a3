#[allow(unused_imports)]
use pretty_assertions::{assert_eq, assert_ne};

use usi_sfen::usi::Usi;
use usi_sfen::*;

fn run(input: &str) -> (String, Position) {
    let mut usi = Usi::new(Vec::new(), "engine", "someone");
    usi.run(input.as_bytes()).unwrap();

    let pos = usi.position().clone();
    let out = String::from_utf8(usi.into_inner()).unwrap();

    (out, pos)
}

#[test]
fn test_handshake() {
    let (out, _) = run("usi\nisready\nusinewgame\n");

    assert_eq!(
        out,
        "\
id name engine
id author someone
option name USI_Ponder type check default true
option name USI_Hash type spin default 256
usiok
readyok
"
    );
}

#[test]
fn test_go_resigns() {
    let (out, _) = run("position startpos moves 7g7f\ngo btime 0 wtime 0 byoyomi 1000\n");

    assert_eq!(out, "bestmove resign\n");
}

#[test]
fn test_unsupported_command() {
    let (out, _) = run("\nfoo bar\nsetoption name USI_Hash value 16\n");

    assert_eq!(out, "info string Unsupported command: foo\n");
}

#[test]
fn test_quit_stops_processing() {
    let (out, _) = run("isready\nquit\nisready\n");

    assert_eq!(out, "readyok\n");
}

#[test]
fn test_position() {
    let sfen = "8l/1l+R2P3/p2pBG1pp/kps1p4/Nn1P2G2/P1P1P2+p1/1PS6/1KSG3+r1/LN2+p3L w Sbgn3p 124";
    let (out, pos) = run(&format!("position sfen {}\n", sfen));

    assert!(out.is_empty());
    assert_eq!(pos.to_sfen(), sfen);
}

#[test]
fn test_bad_position_is_not_fatal() {
    let input = "\
position sfen 4k4/9/9/9/9/9/9/9/4K4 w 2P 9
position sfen lnsgkgsnl/1r5b1/ppppppppp/9/9/9/PPPPPPPPP/1B5R1/LNSGKGSNL
position sfen 4k4/9/9/9/9/9/9/9/4K4 b - zero
isready
";
    let (out, pos) = run(input);

    assert_eq!(out, "readyok\n");
    assert_eq!(pos.to_sfen(), "4k4/9/9/9/9/9/9/9/4K4 w 2P 9");
}
