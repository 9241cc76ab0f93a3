use std::fmt::Write as _;

use crate::position::Position;
use crate::shogi::*;

/// 局面を sfen 文字列 (盤面、手番、手駒、手数の 4 フィールド) にエンコードする。
/// 合法性チェックは一切行わない。
pub fn sfen_encode(pos: &Position) -> String {
    let mut s = String::new();

    sfen_encode_board(pos.board(), &mut s);
    s.push(' ');

    sfen_encode_side(pos.side_to_move(), &mut s);
    s.push(' ');

    sfen_encode_hands(pos.hands(), &mut s);
    s.push(' ');

    write!(s, "{}", pos.ply()).unwrap();

    s
}

/// 局面を USI の position コマンドの引数形式にエンコードする。
///
/// 局面が平手初期局面の場合、"startpos" を返す。
pub fn sfen_encode_position_command(pos: &Position) -> String {
    if *pos == Position::startpos() {
        return "startpos".to_owned();
    }

    format!("sfen {}", sfen_encode(pos))
}

impl Position {
    /// 局面を sfen 文字列にエンコードする。
    pub fn to_sfen(&self) -> String {
        sfen_encode(self)
    }
}

/// 盤面を sfen 盤面文字列にエンコードし、既存の文字列に追記する。
fn sfen_encode_board(board: &Board, s: &mut String) {
    for rank in Rank::iter() {
        if rank != RANK_1 {
            s.push('/');
        }
        sfen_encode_board_rank(board, rank, s);
    }
}

fn sfen_encode_board_rank(board: &Board, rank: Rank, s: &mut String) {
    #[derive(Debug)]
    struct State<'a> {
        s: &'a mut String,
        run_blank: u32,
    }
    impl<'a> State<'a> {
        fn new(s: &'a mut String) -> Self {
            Self { s, run_blank: 0 }
        }
        fn update(&mut self, pc: Piece) {
            if pc.is_piece() {
                self.flush_run();
                sfen_encode_board_piece(pc, self.s);
            } else {
                self.run_blank += 1;
            }
        }
        fn flush_run(&mut self) {
            if self.run_blank > 0 {
                write!(self.s, "{}", self.run_blank).unwrap();
                self.run_blank = 0;
            }
        }
    }

    let mut state = State::new(s);
    for file in File::iter().rev() {
        let sq = Square::from_file_rank(file, rank);
        state.update(board[sq]);
    }
    state.flush_run();
}

fn sfen_encode_board_piece(pc: Piece, s: &mut String) {
    if pc.is_promoted() {
        s.push('+');
    }

    // 全ての実際の駒について、成る前の駒は駒文字を持つ。
    if let Some(c) = pc.unpromote().usi_char() {
        s.push(c);
    }
}

/// 手番の陣営を sfen 手番文字列にエンコードし、既存の文字列に追記する。
fn sfen_encode_side(side_to_move: Color, s: &mut String) {
    match side_to_move {
        BLACK => s.push('b'),
        _ => s.push('w'),
    }
}

/// 両陣営の手駒を sfen 手駒文字列にエンコードし、既存の文字列に追記する。
fn sfen_encode_hands(hands: &Hands, s: &mut String) {
    // 全ての先手の手駒、全ての後手の手駒の順に並べ、
    // 駒種は飛、角、金、銀、桂、香、歩の順に並べる。

    let mut empty = true;

    for color in Color::iter() {
        for pc in Piece::iter_hand(color).rev() {
            let n = hands[pc];
            if n == 0 {
                continue;
            }
            empty = false;

            if n >= 2 {
                write!(s, "{}", n).unwrap();
            }
            if let Some(c) = pc.usi_char() {
                s.push(c);
            }
        }
    }

    if empty {
        s.push('-');
    }
}
