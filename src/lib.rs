mod error;
pub mod myarray;
mod position;
mod sfen;
mod shogi;
pub mod usi;

pub use self::error::*;
pub use self::position::*;
pub use self::sfen::*;
pub use self::shogi::*;
