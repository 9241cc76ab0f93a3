//! 将棋の基本要素たち。
//!
//! 駒などは enum ではなく、いわゆる newtype で表現する。
//! 内部値をそのまま配列のインデックスとして使うため。
//!
//! 筋、段、マスの内部値は以下のように割り当てている:
//!
//! * 筋は１筋, ２筋, ..., ９筋の順。(１筋は先手から見て右端)
//! * 段は一段目, 二段目, ..., 九段目の順。
//! * マスは１一, １二, ..., ９九の順。即ち盤面は `[筋][段]` の順に並ぶ。

use std::iter::FusedIterator;

use once_cell::sync::Lazy;

use crate::error::{ShogiError, ShogiResult};
use crate::myarray::*;

/// 陣営。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Color(u32);

pub const BLACK: Color = Color(0);
pub const WHITE: Color = Color(1);

impl Color {
    /// 陣営を昇順に列挙する。(`BLACK`、`WHITE` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [BLACK, WHITE].into_iter()
    }
}

impl From<Color> for usize {
    fn from(color: Color) -> Self {
        color.0 as Self
    }
}

impl std::fmt::Debug for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            BLACK => write!(f, "BLACK"),
            WHITE => write!(f, "WHITE"),
            _ => write!(f, "Color({})", self.0),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match *self {
            BLACK => write!(f, "先手"),
            WHITE => write!(f, "後手"),
            color => write!(f, "無効な陣営({})", color.0),
        }
    }
}

/// 盤面の筋。たとえば `FILE_3` は３筋。
///
/// sfen デコード中のカーソルとして盤面外の値を一時的に持つことがある。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct File(i32);

pub const FILE_1: File = File(0);
pub const FILE_2: File = File(1);
pub const FILE_3: File = File(2);
pub const FILE_4: File = File(3);
pub const FILE_5: File = File(4);
pub const FILE_6: File = File(5);
pub const FILE_7: File = File(6);
pub const FILE_8: File = File(7);
pub const FILE_9: File = File(8);

impl File {
    /// 筋が盤面内かどうかを返す。
    pub const fn is_on_board(self) -> bool {
        FILE_1.0 <= self.0 && self.0 <= FILE_9.0
    }

    /// 全ての筋を昇順に列挙する。(`FILE_1`, `FILE_2`, ..., `FILE_9` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        // ExactSizeIterator にするため、配列をベタ書きする。
        [
            FILE_1, FILE_2, FILE_3, FILE_4, FILE_5, FILE_6, FILE_7, FILE_8, FILE_9,
        ]
        .into_iter()
    }
}

impl std::ops::Add<i32> for File {
    type Output = File;

    fn add(self, rhs: i32) -> File {
        File(self.0 + rhs)
    }
}

impl std::ops::Sub<i32> for File {
    type Output = File;

    fn sub(self, rhs: i32) -> File {
        File(self.0 - rhs)
    }
}

impl std::ops::SubAssign<i32> for File {
    fn sub_assign(&mut self, rhs: i32) {
        *self = *self - rhs;
    }
}

impl From<File> for usize {
    fn from(file: File) -> Self {
        debug_assert!(file.is_on_board());

        file.0 as Self
    }
}

impl std::fmt::Debug for File {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_on_board() {
            write!(f, "FILE_{}", self.0 + 1)
        } else {
            write!(f, "File({})", self.0)
        }
    }
}

impl std::fmt::Display for File {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        const TABLE: [&str; 9] = ["１", "２", "３", "４", "５", "６", "７", "８", "９"];

        if self.is_on_board() {
            f.write_str(TABLE[self.0 as usize])
        } else {
            write!(f, "無効な筋({})", self.0)
        }
    }
}

/// 盤面の段。たとえば `RANK_3` は三段目。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Rank(i32);

pub const RANK_1: Rank = Rank(0);
pub const RANK_2: Rank = Rank(1);
pub const RANK_3: Rank = Rank(2);
pub const RANK_4: Rank = Rank(3);
pub const RANK_5: Rank = Rank(4);
pub const RANK_6: Rank = Rank(5);
pub const RANK_7: Rank = Rank(6);
pub const RANK_8: Rank = Rank(7);
pub const RANK_9: Rank = Rank(8);

impl Rank {
    /// 段が盤面内かどうかを返す。
    pub const fn is_on_board(self) -> bool {
        RANK_1.0 <= self.0 && self.0 <= RANK_9.0
    }

    /// 全ての段を昇順に列挙する。(`RANK_1`, `RANK_2`, ..., `RANK_9` の順)
    pub fn iter(
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        [
            RANK_1, RANK_2, RANK_3, RANK_4, RANK_5, RANK_6, RANK_7, RANK_8, RANK_9,
        ]
        .into_iter()
    }

    /// 内部値を返す。`const` 文脈で使える。
    pub const fn inner(self) -> i32 {
        self.0
    }
}

impl From<Rank> for usize {
    fn from(rank: Rank) -> Self {
        debug_assert!(rank.is_on_board());

        rank.0 as Self
    }
}

impl std::fmt::Debug for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_on_board() {
            write!(f, "RANK_{}", self.0 + 1)
        } else {
            write!(f, "Rank({})", self.0)
        }
    }
}

impl std::fmt::Display for Rank {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        const TABLE: [&str; 9] = ["一", "二", "三", "四", "五", "六", "七", "八", "九"];

        if self.is_on_board() {
            f.write_str(TABLE[self.0 as usize])
        } else {
            write!(f, "無効な段({})", self.0)
        }
    }
}

/// 盤面のマス。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Square(i32);

impl Square {
    /// 筋と段からマスを作る。
    pub const fn from_file_rank(file: File, rank: Rank) -> Self {
        Self(9 * file.0 + rank.0)
    }

    /// マスが盤面内かどうかを返す。
    pub const fn is_on_board(self) -> bool {
        0 <= self.0 && self.0 < 81
    }

    /// マスの属する筋を返す。
    pub const fn file(self) -> File {
        debug_assert!(self.is_on_board());

        File(self.0 / 9)
    }

    /// マスの属する段を返す。
    pub const fn rank(self) -> Rank {
        debug_assert!(self.is_on_board());

        Rank(self.0 % 9)
    }

    /// 全マスを昇順に列挙する。(１一, １二, ..., ９九 の順)
    pub fn iter() -> impl Iterator<Item = Self> + DoubleEndedIterator + FusedIterator {
        (0..81).map(Self)
    }
}

impl std::fmt::Debug for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_on_board() {
            write!(f, "SQ_{}{}", self.file().0 + 1, self.rank().0 + 1)
        } else {
            write!(f, "Square({})", self.0)
        }
    }
}

impl std::fmt::Display for Square {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        if self.is_on_board() {
            write!(f, "{}{}", self.file(), self.rank())
        } else {
            write!(f, "無効なマス({})", self.0)
        }
    }
}

/// 駒(陣営の区別あり)。
///
/// 内部値は 0 から `Piece::NUM - 1` まで連続しており、配列のインデックスとして使える。
/// 先手の駒 14 種の後に、同じ並びで後手の駒 14 種が続く。
#[derive(Clone, Copy, Eq, Hash, Ord, PartialEq, PartialOrd)]
#[repr(transparent)]
pub struct Piece(u32);

pub const NO_PIECE: Piece = Piece(0);
pub const B_PAWN: Piece = Piece(1);
pub const B_LANCE: Piece = Piece(2);
pub const B_KNIGHT: Piece = Piece(3);
pub const B_SILVER: Piece = Piece(4);
pub const B_GOLD: Piece = Piece(5);
pub const B_BISHOP: Piece = Piece(6);
pub const B_ROOK: Piece = Piece(7);
pub const B_KING: Piece = Piece(8);
pub const B_PRO_PAWN: Piece = Piece(9);
pub const B_PRO_LANCE: Piece = Piece(10);
pub const B_PRO_KNIGHT: Piece = Piece(11);
pub const B_PRO_SILVER: Piece = Piece(12);
pub const B_HORSE: Piece = Piece(13);
pub const B_DRAGON: Piece = Piece(14);
pub const W_PAWN: Piece = Piece(15);
pub const W_LANCE: Piece = Piece(16);
pub const W_KNIGHT: Piece = Piece(17);
pub const W_SILVER: Piece = Piece(18);
pub const W_GOLD: Piece = Piece(19);
pub const W_BISHOP: Piece = Piece(20);
pub const W_ROOK: Piece = Piece(21);
pub const W_KING: Piece = Piece(22);
pub const W_PRO_PAWN: Piece = Piece(23);
pub const W_PRO_LANCE: Piece = Piece(24);
pub const W_PRO_KNIGHT: Piece = Piece(25);
pub const W_PRO_SILVER: Piece = Piece(26);
pub const W_HORSE: Piece = Piece(27);
pub const W_DRAGON: Piece = Piece(28);

/// 各駒の表示用文字列。後手の駒には向きを表す矢印が付く。
#[rustfmt::skip]
const GLYPHS: [&str; Piece::NUM] = [
    "　　",
    " 歩 ", " 香 ", " 桂 ", " 銀 ", " 金 ", " 角 ", " 飛 ", " 王 ",
    " と ", " 杏 ", " 圭 ", " 全 ", " 馬 ", " 龍 ",
    "歩↓", "香↓", "桂↓", "銀↓", "金↓", "角↓", "飛↓", "王↓",
    "と↓", "杏↓", "圭↓", "全↓", "馬↓", "龍↓",
];

/// 成った駒。成れない駒については `None`。
#[rustfmt::skip]
const PROMOTED: [Option<Piece>; Piece::NUM] = [
    None,
    Some(B_PRO_PAWN), Some(B_PRO_LANCE), Some(B_PRO_KNIGHT), Some(B_PRO_SILVER),
    None, Some(B_HORSE), Some(B_DRAGON), None,
    None, None, None, None, None, None,
    Some(W_PRO_PAWN), Some(W_PRO_LANCE), Some(W_PRO_KNIGHT), Some(W_PRO_SILVER),
    None, Some(W_HORSE), Some(W_DRAGON), None,
    None, None, None, None, None, None,
];

/// 成る前の駒。成駒以外はそれ自身。
#[rustfmt::skip]
const UNPROMOTED: [Piece; Piece::NUM] = [
    NO_PIECE,
    B_PAWN, B_LANCE, B_KNIGHT, B_SILVER, B_GOLD, B_BISHOP, B_ROOK, B_KING,
    B_PAWN, B_LANCE, B_KNIGHT, B_SILVER, B_BISHOP, B_ROOK,
    W_PAWN, W_LANCE, W_KNIGHT, W_SILVER, W_GOLD, W_BISHOP, W_ROOK, W_KING,
    W_PAWN, W_LANCE, W_KNIGHT, W_SILVER, W_BISHOP, W_ROOK,
];

/// USI の駒文字。成駒は単独の駒文字を持たない。
#[rustfmt::skip]
const USI_CHARS: [Option<char>; Piece::NUM] = [
    None,
    Some('P'), Some('L'), Some('N'), Some('S'), Some('G'), Some('B'), Some('R'), Some('K'),
    None, None, None, None, None, None,
    Some('p'), Some('l'), Some('n'), Some('s'), Some('g'), Some('b'), Some('r'), Some('k'),
    None, None, None, None, None, None,
];

/// 持ち駒の表示用文字。表示用文字列から空白を除いた最初の文字。
/// 持ち駒となりえない駒については `None`。
static HAND_GLYPHS: Lazy<MyArray1<Option<char>, Piece, { Piece::NUM }>> = Lazy::new(|| {
    let mut table = MyArray1::from([None; Piece::NUM]);
    for pc in Piece::iter().filter(|pc| pc.is_hand()) {
        table[pc] = pc.glyph().trim_matches(' ').chars().next();
    }
    table
});

impl Piece {
    /// `NO_PIECE` を含む駒の総数。
    pub const NUM: usize = 29;

    /// 実際の駒かどうかを返す。`NO_PIECE` は実際の駒ではない。
    pub const fn is_piece(self) -> bool {
        self.0 != NO_PIECE.0
    }

    /// 成れる駒かどうかを返す。
    pub const fn is_promotable(self) -> bool {
        PROMOTED[self.0 as usize].is_some()
    }

    /// 成駒かどうかを返す。
    pub const fn is_promoted(self) -> bool {
        (B_PRO_PAWN.0 <= self.0 && self.0 <= B_DRAGON.0)
            || (W_PRO_PAWN.0 <= self.0 && self.0 <= W_DRAGON.0)
    }

    /// 持ち駒となりうる駒かどうかを返す。成駒、玉、`NO_PIECE` は該当しない。
    pub const fn is_hand(self) -> bool {
        (B_PAWN.0 <= self.0 && self.0 <= B_ROOK.0) || (W_PAWN.0 <= self.0 && self.0 <= W_ROOK.0)
    }

    /// 成った駒を返す。
    ///
    /// 金、玉、成駒、`NO_PIECE` に対しては `NotPromotable` を返す。
    pub fn promote(self) -> ShogiResult<Self> {
        PROMOTED[usize::from(self)].ok_or(ShogiError::NotPromotable(self))
    }

    /// 成る前の駒を返す。成駒以外に対してはそれ自身を返す。
    pub const fn unpromote(self) -> Self {
        UNPROMOTED[self.0 as usize]
    }

    /// 盤面表示用の文字列を返す。全ての駒について定義されている。
    pub const fn glyph(self) -> &'static str {
        GLYPHS[self.0 as usize]
    }

    /// 持ち駒表示用の 1 文字を返す。
    ///
    /// 持ち駒となりえない駒に対しては `InvalidArgument` を返す。
    pub fn hand_glyph(self) -> ShogiResult<char> {
        HAND_GLYPHS[self].ok_or_else(|| {
            ShogiError::InvalidArgument(format!("{:?} cannot be a hand piece", self))
        })
    }

    /// USI の駒文字から駒を作る。成駒は作れない。
    pub fn from_usi_char(c: char) -> ShogiResult<Self> {
        match c {
            'P' => Ok(B_PAWN),
            'L' => Ok(B_LANCE),
            'N' => Ok(B_KNIGHT),
            'S' => Ok(B_SILVER),
            'G' => Ok(B_GOLD),
            'B' => Ok(B_BISHOP),
            'R' => Ok(B_ROOK),
            'K' => Ok(B_KING),
            'p' => Ok(W_PAWN),
            'l' => Ok(W_LANCE),
            'n' => Ok(W_KNIGHT),
            's' => Ok(W_SILVER),
            'g' => Ok(W_GOLD),
            'b' => Ok(W_BISHOP),
            'r' => Ok(W_ROOK),
            'k' => Ok(W_KING),
            _ => Err(ShogiError::UnknownPieceCode(c)),
        }
    }

    /// USI の駒文字を返す。成駒と `NO_PIECE` に対しては `None` を返す。
    pub const fn usi_char(self) -> Option<char> {
        USI_CHARS[self.0 as usize]
    }

    /// 全ての駒を `NO_PIECE` も含めて昇順に列挙する。
    pub fn iter() -> impl Iterator<Item = Self> + DoubleEndedIterator + FusedIterator {
        (0..Self::NUM as u32).map(Self)
    }

    /// 指定した陣営の持ち駒となりうる駒を列挙する。(歩、香、桂、銀、金、角、飛の順)
    pub fn iter_hand(
        color: Color,
    ) -> impl Iterator<Item = Self> + DoubleEndedIterator + ExactSizeIterator + FusedIterator {
        let pcs = match color {
            BLACK => [B_PAWN, B_LANCE, B_KNIGHT, B_SILVER, B_GOLD, B_BISHOP, B_ROOK],
            _ => [W_PAWN, W_LANCE, W_KNIGHT, W_SILVER, W_GOLD, W_BISHOP, W_ROOK],
        };
        pcs.into_iter()
    }
}

impl From<Piece> for usize {
    fn from(pc: Piece) -> Self {
        pc.0 as Self
    }
}

impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        #[rustfmt::skip]
        const NAMES: [&str; Piece::NUM] = [
            "NO_PIECE",
            "B_PAWN", "B_LANCE", "B_KNIGHT", "B_SILVER", "B_GOLD", "B_BISHOP", "B_ROOK", "B_KING",
            "B_PRO_PAWN", "B_PRO_LANCE", "B_PRO_KNIGHT", "B_PRO_SILVER", "B_HORSE", "B_DRAGON",
            "W_PAWN", "W_LANCE", "W_KNIGHT", "W_SILVER", "W_GOLD", "W_BISHOP", "W_ROOK", "W_KING",
            "W_PRO_PAWN", "W_PRO_LANCE", "W_PRO_KNIGHT", "W_PRO_SILVER", "W_HORSE", "W_DRAGON",
        ];

        match NAMES.get(self.0 as usize) {
            Some(name) => f.write_str(name),
            None => write!(f, "Piece({})", self.0),
        }
    }
}

impl std::fmt::Display for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.write_str(self.glyph())
    }
}

/// 盤面。`[筋][段]` の順に駒を持つ。
#[derive(Clone, Debug, Eq, Hash, PartialEq)]
#[repr(transparent)]
pub struct Board([[Piece; 9]; 9]);

impl Board {
    /// 空の盤面を返す。
    pub const fn empty() -> Self {
        Self([[NO_PIECE; 9]; 9])
    }

    /// 平手初期盤面を返す。
    pub const fn startpos() -> Self {
        // 各行が 1 つの筋 (１筋から９筋の順) で、各行内は一段目から九段目の順。
        #[rustfmt::skip]
        const INNER: [[Piece; 9]; 9] = [
            [W_LANCE,  NO_PIECE, W_PAWN, NO_PIECE, NO_PIECE, NO_PIECE, B_PAWN, NO_PIECE, B_LANCE],
            [W_KNIGHT, W_BISHOP, W_PAWN, NO_PIECE, NO_PIECE, NO_PIECE, B_PAWN, B_ROOK,   B_KNIGHT],
            [W_SILVER, NO_PIECE, W_PAWN, NO_PIECE, NO_PIECE, NO_PIECE, B_PAWN, NO_PIECE, B_SILVER],
            [W_GOLD,   NO_PIECE, W_PAWN, NO_PIECE, NO_PIECE, NO_PIECE, B_PAWN, NO_PIECE, B_GOLD],
            [W_KING,   NO_PIECE, W_PAWN, NO_PIECE, NO_PIECE, NO_PIECE, B_PAWN, NO_PIECE, B_KING],
            [W_GOLD,   NO_PIECE, W_PAWN, NO_PIECE, NO_PIECE, NO_PIECE, B_PAWN, NO_PIECE, B_GOLD],
            [W_SILVER, NO_PIECE, W_PAWN, NO_PIECE, NO_PIECE, NO_PIECE, B_PAWN, NO_PIECE, B_SILVER],
            [W_KNIGHT, W_ROOK,   W_PAWN, NO_PIECE, NO_PIECE, NO_PIECE, B_PAWN, B_BISHOP, B_KNIGHT],
            [W_LANCE,  NO_PIECE, W_PAWN, NO_PIECE, NO_PIECE, NO_PIECE, B_PAWN, NO_PIECE, B_LANCE],
        ];

        Self(INNER)
    }
}

impl std::ops::Index<Square> for Board {
    type Output = Piece;

    fn index(&self, sq: Square) -> &Self::Output {
        &self.0[usize::from(sq.file())][usize::from(sq.rank())]
    }
}

impl std::ops::IndexMut<Square> for Board {
    fn index_mut(&mut self, sq: Square) -> &mut Self::Output {
        &mut self.0[usize::from(sq.file())][usize::from(sq.rank())]
    }
}

/// 両陣営の持ち駒の枚数。駒でインデックスアクセスできる。
///
/// 持ち駒となりうる駒以外の枠は常に 0 であることが期待されるが、強制はしない。
pub type Hands = MyArray1<u32, Piece, { Piece::NUM }>;

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_promote() {
        let promotables: Vec<_> = Piece::iter().filter(|pc| pc.is_promotable()).collect();
        assert_eq!(
            promotables,
            [
                B_PAWN, B_LANCE, B_KNIGHT, B_SILVER, B_BISHOP, B_ROOK, W_PAWN, W_LANCE, W_KNIGHT,
                W_SILVER, W_BISHOP, W_ROOK
            ]
        );

        let promoted: HashSet<_> = promotables
            .iter()
            .map(|pc| pc.promote().unwrap())
            .collect();
        assert_eq!(promoted.len(), promotables.len());
        assert!(promoted.iter().all(|pc| pc.is_promoted()));
        assert!(promotables
            .iter()
            .all(|&pc| pc.promote().unwrap().unpromote() == pc));

        assert_eq!(B_ROOK.promote(), Ok(B_DRAGON));
        assert_eq!(W_BISHOP.promote(), Ok(W_HORSE));
    }

    #[test]
    fn test_promote_rejects() {
        for pc in [NO_PIECE, B_GOLD, W_GOLD, B_KING, W_KING, B_PRO_PAWN, W_DRAGON] {
            assert_eq!(pc.promote(), Err(ShogiError::NotPromotable(pc)));
        }
    }

    #[test]
    fn test_usi_char() {
        for c in "PLNSGBRKplnsgbrk".chars() {
            let pc = Piece::from_usi_char(c).unwrap();
            assert_eq!(pc.usi_char(), Some(c));
        }
        assert_eq!(Piece::from_usi_char('k'), Ok(W_KING));
        assert_eq!(Piece::from_usi_char('+'), Err(ShogiError::UnknownPieceCode('+')));
        assert_eq!(Piece::from_usi_char('x'), Err(ShogiError::UnknownPieceCode('x')));
        assert_eq!(B_HORSE.usi_char(), None);
    }

    #[test]
    fn test_glyph() {
        assert_eq!(NO_PIECE.glyph(), "　　");
        assert_eq!(B_KING.glyph(), " 王 ");
        assert_eq!(W_PRO_PAWN.to_string(), "と↓");
    }

    #[test]
    fn test_hand_glyph() {
        assert_eq!(B_PAWN.hand_glyph(), Ok('歩'));
        assert_eq!(W_ROOK.hand_glyph(), Ok('飛'));
        assert_eq!(W_GOLD.hand_glyph(), Ok('金'));

        for pc in [NO_PIECE, B_KING, W_KING, B_PRO_SILVER, W_HORSE] {
            assert!(matches!(
                pc.hand_glyph(),
                Err(ShogiError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn test_square() {
        let sq = Square::from_file_rank(FILE_7, RANK_6);
        assert_eq!(sq.file(), FILE_7);
        assert_eq!(sq.rank(), RANK_6);
        assert_eq!(format!("{:?}", sq), "SQ_76");
        assert_eq!(sq.to_string(), "７六");
        assert_eq!(Square::iter().count(), 81);
    }

    #[test]
    fn test_board_startpos() {
        let board = Board::startpos();
        assert_eq!(board[Square::from_file_rank(FILE_5, RANK_9)], B_KING);
        assert_eq!(board[Square::from_file_rank(FILE_5, RANK_1)], W_KING);
        assert_eq!(board[Square::from_file_rank(FILE_2, RANK_8)], B_ROOK);
        assert_eq!(board[Square::from_file_rank(FILE_8, RANK_8)], B_BISHOP);
        assert_eq!(board[Square::from_file_rank(FILE_8, RANK_2)], W_ROOK);
        assert_eq!(board[Square::from_file_rank(FILE_2, RANK_2)], W_BISHOP);
    }
}
