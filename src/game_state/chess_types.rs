//! Core value types for the 0x88 board model.
//!
//! Pieces are single bytes combining one kind bit and one color bit, so
//! "belongs to side X" and "is of kind Y" are both a single mask test.

pub use crate::game_state::game_state::{GameState, LastMove};

/// Board square index in the padded `rank << 4 | file` layout (`a1 == 0`, `h8 == 119`).
pub type Square = u8;

/// Side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Color {
    Light,
    Dark,
}

impl Color {
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            Color::Light => 0,
            Color::Dark => 1,
        }
    }

    #[inline]
    pub const fn opposite(self) -> Self {
        match self {
            Color::Light => Color::Dark,
            Color::Dark => Color::Light,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            Color::Light => Piece::LIGHT_BIT,
            Color::Dark => Piece::DARK_BIT,
        }
    }

    /// Score sign for this color: Light maximizes, Dark minimizes.
    #[inline]
    pub const fn sign(self) -> i32 {
        match self {
            Color::Light => 1,
            Color::Dark => -1,
        }
    }
}

/// Piece kind. Color is carried separately by [`Piece`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum PieceKind {
    Pawn,
    Rook,
    Knight,
    Bishop,
    Queen,
    King,
}

impl PieceKind {
    pub const ALL: [PieceKind; 6] = [
        PieceKind::Pawn,
        PieceKind::Rook,
        PieceKind::Knight,
        PieceKind::Bishop,
        PieceKind::Queen,
        PieceKind::King,
    ];

    /// Promotion choices in generation order.
    pub const PROMOTIONS: [PieceKind; 4] = [
        PieceKind::Queen,
        PieceKind::Rook,
        PieceKind::Bishop,
        PieceKind::Knight,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        match self {
            PieceKind::Pawn => 0,
            PieceKind::Rook => 1,
            PieceKind::Knight => 2,
            PieceKind::Bishop => 3,
            PieceKind::Queen => 4,
            PieceKind::King => 5,
        }
    }

    #[inline]
    const fn bit(self) -> u8 {
        match self {
            PieceKind::Pawn => 0b0000_0001,
            PieceKind::Rook => 0b0000_0010,
            PieceKind::Knight => 0b0000_0100,
            PieceKind::Bishop => 0b0000_1000,
            PieceKind::Queen => 0b0001_0000,
            PieceKind::King => 0b0010_0000,
        }
    }
}

/// A colored piece or the empty square, packed as `kind_bit | color_bit`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Piece(u8);

impl Piece {
    const LIGHT_BIT: u8 = 0b0100_0000;
    const DARK_BIT: u8 = 0b1000_0000;
    const KIND_BITS: u8 = 0b0011_1111;
    const SLIDER_BITS: u8 = 0b0001_1010;

    pub const EMPTY: Piece = Piece(0);

    #[inline]
    pub const fn new(color: Color, kind: PieceKind) -> Self {
        Piece(color.bit() | kind.bit())
    }

    #[inline]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    #[inline]
    pub const fn belongs_to(self, color: Color) -> bool {
        self.0 & color.bit() != 0
    }

    #[inline]
    pub const fn is(self, kind: PieceKind) -> bool {
        self.0 & kind.bit() != 0
    }

    /// Rooks, bishops and queens repeat their move vectors.
    #[inline]
    pub const fn is_slider(self) -> bool {
        self.0 & Self::SLIDER_BITS != 0
    }

    pub fn color(self) -> Option<Color> {
        if self.belongs_to(Color::Light) {
            Some(Color::Light)
        } else if self.belongs_to(Color::Dark) {
            Some(Color::Dark)
        } else {
            None
        }
    }

    pub fn kind(self) -> Option<PieceKind> {
        let kind_bits = self.0 & Self::KIND_BITS;
        PieceKind::ALL.into_iter().find(|kind| kind.bit() == kind_bits)
    }

    /// Same kind, other color. The empty square maps to itself.
    #[inline]
    pub fn with_color(self, color: Color) -> Self {
        match self.kind() {
            Some(kind) => Piece::new(color, kind),
            None => Piece::EMPTY,
        }
    }
}

impl std::fmt::Debug for Piece {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match (self.color(), self.kind()) {
            (Some(color), Some(kind)) => write!(f, "{color:?}{kind:?}"),
            _ => write!(f, "Empty"),
        }
    }
}

/// Castling rights bitmask.
pub type CastlingRights = u8;

pub const CASTLE_LIGHT_KINGSIDE: CastlingRights = 1 << 0;
pub const CASTLE_LIGHT_QUEENSIDE: CastlingRights = 1 << 1;
pub const CASTLE_DARK_KINGSIDE: CastlingRights = 1 << 2;
pub const CASTLE_DARK_QUEENSIDE: CastlingRights = 1 << 3;
pub const CASTLE_LIGHT: CastlingRights = CASTLE_LIGHT_KINGSIDE | CASTLE_LIGHT_QUEENSIDE;
pub const CASTLE_DARK: CastlingRights = CASTLE_DARK_KINGSIDE | CASTLE_DARK_QUEENSIDE;

#[inline]
pub const fn castling_rights_of(color: Color) -> CastlingRights {
    match color {
        Color::Light => CASTLE_LIGHT,
        Color::Dark => CASTLE_DARK,
    }
}

/// One of the four castling moves, with its king and rook squares.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CastleMove {
    LightKingside,
    LightQueenside,
    DarkKingside,
    DarkQueenside,
}

impl CastleMove {
    pub const ALL: [CastleMove; 4] = [
        CastleMove::LightKingside,
        CastleMove::LightQueenside,
        CastleMove::DarkKingside,
        CastleMove::DarkQueenside,
    ];

    pub const fn kingside(color: Color) -> Self {
        match color {
            Color::Light => CastleMove::LightKingside,
            Color::Dark => CastleMove::DarkKingside,
        }
    }

    pub const fn queenside(color: Color) -> Self {
        match color {
            Color::Light => CastleMove::LightQueenside,
            Color::Dark => CastleMove::DarkQueenside,
        }
    }

    pub const fn color(self) -> Color {
        match self {
            CastleMove::LightKingside | CastleMove::LightQueenside => Color::Light,
            CastleMove::DarkKingside | CastleMove::DarkQueenside => Color::Dark,
        }
    }

    pub const fn right(self) -> CastlingRights {
        match self {
            CastleMove::LightKingside => CASTLE_LIGHT_KINGSIDE,
            CastleMove::LightQueenside => CASTLE_LIGHT_QUEENSIDE,
            CastleMove::DarkKingside => CASTLE_DARK_KINGSIDE,
            CastleMove::DarkQueenside => CASTLE_DARK_QUEENSIDE,
        }
    }

    pub const fn king_from(self) -> Square {
        match self.color() {
            Color::Light => 0x04,
            Color::Dark => 0x74,
        }
    }

    pub const fn king_to(self) -> Square {
        match self {
            CastleMove::LightKingside => 0x06,
            CastleMove::LightQueenside => 0x02,
            CastleMove::DarkKingside => 0x76,
            CastleMove::DarkQueenside => 0x72,
        }
    }

    pub const fn rook_from(self) -> Square {
        match self {
            CastleMove::LightKingside => 0x07,
            CastleMove::LightQueenside => 0x00,
            CastleMove::DarkKingside => 0x77,
            CastleMove::DarkQueenside => 0x70,
        }
    }

    pub const fn rook_to(self) -> Square {
        match self {
            CastleMove::LightKingside => 0x05,
            CastleMove::LightQueenside => 0x03,
            CastleMove::DarkKingside => 0x75,
            CastleMove::DarkQueenside => 0x73,
        }
    }
}
