use crate::shogi::*;

/// 局面。
///
/// 局面設定のたびに作り直される値であり、作成後に勝手に書き換わることはない。
/// 合法性は一切保証しない(sfen デコーダを経由した場合のみ構文的な妥当性が保証される)。
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
pub struct Position {
    side_to_move: Color,
    board: Board,
    hands: Hands,
    ply: u32, // 1 から始まる。
}

impl Position {
    /// 手番、盤面、両陣営の手駒、手数を指定して局面を作る。
    /// 合法性チェックは一切行わない。
    pub fn new(side_to_move: Color, board: Board, hands: Hands, ply: u32) -> Self {
        Self {
            side_to_move,
            board,
            hands,
            ply,
        }
    }

    /// 平手初期局面を返す。
    pub fn startpos() -> Self {
        Self::new(BLACK, Board::startpos(), Hands::default(), 1)
    }

    /// 手番を返す。
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// 盤面への参照を返す。
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// 両陣営の手駒への参照を返す。
    pub fn hands(&self) -> &Hands {
        &self.hands
    }

    /// 両陣営の手駒への可変参照を返す。
    pub fn hands_mut(&mut self) -> &mut Hands {
        &mut self.hands
    }

    /// 手数を返す。
    pub fn ply(&self) -> u32 {
        self.ply
    }
}

/// 盤面と手駒を図にする。
///
/// 盤面は九段分の枠付きの表で、各段は９筋から１筋の順に並ぶ。
/// その後に先手、後手の持ち駒と手番が続く。
/// 持ち駒は歩、香、桂、銀、金、角、飛の順に枚数分だけ 1 文字ずつ並べる。
///
/// 検証は一切行わない。持ち駒となりえない枠の枚数は単に無視される。
impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        const RANK_SEPARATOR: &str = "+----+----+----+----+----+----+----+----+----+";

        writeln!(f, "{}", RANK_SEPARATOR)?;
        for rank in Rank::iter() {
            f.write_str("|")?;
            for file in File::iter().rev() {
                let sq = Square::from_file_rank(file, rank);
                write!(f, "{}|", self.board[sq])?;
            }
            writeln!(f)?;
            writeln!(f, "{}", RANK_SEPARATOR)?;
        }

        for color in Color::iter() {
            write!(f, "{} 持ち駒: ", color)?;
            for pc in Piece::iter_hand(color) {
                let Ok(c) = pc.hand_glyph() else {
                    continue;
                };
                for _ in 0..self.hands[pc] {
                    write!(f, "{}", c)?;
                }
            }
            writeln!(f)?;
        }

        writeln!(f, "手番: {}", self.side_to_move)
    }
}
