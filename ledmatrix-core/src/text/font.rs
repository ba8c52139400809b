//! Built-in 3x5 font
//!
//! One glyph per printable ASCII character from space (32) to `~` (126).
//! Each row is three bits with the leftmost column in bit 2. The two slots
//! after `~` are blank.

/// Glyph width in columns
pub const FONT_WIDTH: usize = 3;

/// Glyph height in rows
pub const FONT_HEIGHT: usize = 5;

/// Columns left empty between two characters
pub const CHAR_SPACING: usize = 1;

/// Horizontal cursor advance per character
pub const CHAR_ADVANCE: usize = FONT_WIDTH + CHAR_SPACING;

/// Character code of the first table entry
pub const FIRST_CHAR: u32 = 32;

/// Number of table slots
pub const GLYPH_COUNT: usize = 97;

/// A 3x5 monochrome glyph
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Glyph {
    rows: [u8; FONT_HEIGHT],
}

impl Glyph {
    /// The empty glyph
    pub const BLANK: Glyph = Glyph::from_rows([0; FONT_HEIGHT]);

    /// Build a glyph from row bitmasks (bit 2 = column 0)
    pub const fn from_rows(rows: [u8; FONT_HEIGHT]) -> Self {
        Self { rows }
    }

    /// Raw row bitmasks
    pub const fn rows(&self) -> [u8; FONT_HEIGHT] {
        self.rows
    }

    /// Whether the cell at `row`, `col` is lit
    ///
    /// Cells outside the 3x5 cell are never lit.
    pub fn is_lit(&self, row: usize, col: usize) -> bool {
        col < FONT_WIDTH
            && self
                .rows
                .get(row)
                .is_some_and(|bits| bits & (1 << (FONT_WIDTH - 1 - col)) != 0)
    }

    /// Whether no cell is lit
    pub fn is_blank(&self) -> bool {
        self.rows.iter().all(|&bits| bits == 0)
    }

    /// `(col, row)` of every lit cell, row by row
    pub fn lit_cells(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        (0..FONT_HEIGHT).flat_map(move |row| {
            (0..FONT_WIDTH)
                .filter(move |&col| self.is_lit(row, col))
                .map(move |col| (col, row))
        })
    }
}

/// Glyph table indexed by `code - FIRST_CHAR`
pub static GLYPHS: [Glyph; GLYPH_COUNT] = [
    Glyph::from_rows([0b000, 0b000, 0b000, 0b000, 0b000]), // space
    Glyph::from_rows([0b010, 0b010, 0b010, 0b000, 0b010]), // !
    Glyph::from_rows([0b010, 0b010, 0b000, 0b000, 0b000]), // "
    Glyph::from_rows([0b101, 0b111, 0b101, 0b111, 0b101]), // #
    Glyph::from_rows([0b111, 0b110, 0b111, 0b011, 0b111]), // $
    Glyph::from_rows([0b100, 0b001, 0b010, 0b100, 0b001]), // %
    Glyph::from_rows([0b010, 0b101, 0b010, 0b101, 0b011]), // &
    Glyph::from_rows([0b010, 0b000, 0b000, 0b000, 0b000]), // '
    Glyph::from_rows([0b001, 0b010, 0b010, 0b010, 0b001]), // (
    Glyph::from_rows([0b100, 0b010, 0b010, 0b010, 0b100]), // )
    Glyph::from_rows([0b000, 0b101, 0b010, 0b101, 0b000]), // *
    Glyph::from_rows([0b000, 0b010, 0b111, 0b010, 0b000]), // +
    Glyph::from_rows([0b000, 0b000, 0b000, 0b010, 0b100]), // ,
    Glyph::from_rows([0b000, 0b000, 0b111, 0b000, 0b000]), // -
    Glyph::from_rows([0b000, 0b000, 0b000, 0b000, 0b100]), // .
    Glyph::from_rows([0b001, 0b001, 0b010, 0b100, 0b100]), // /
    Glyph::from_rows([0b111, 0b101, 0b101, 0b101, 0b111]), // 0
    Glyph::from_rows([0b001, 0b001, 0b001, 0b001, 0b001]), // 1
    Glyph::from_rows([0b111, 0b001, 0b111, 0b100, 0b111]), // 2
    Glyph::from_rows([0b111, 0b001, 0b111, 0b001, 0b111]), // 3
    Glyph::from_rows([0b101, 0b101, 0b111, 0b001, 0b001]), // 4
    Glyph::from_rows([0b111, 0b100, 0b111, 0b001, 0b111]), // 5
    Glyph::from_rows([0b111, 0b100, 0b111, 0b101, 0b111]), // 6
    Glyph::from_rows([0b111, 0b001, 0b001, 0b001, 0b001]), // 7
    Glyph::from_rows([0b111, 0b101, 0b111, 0b101, 0b111]), // 8
    Glyph::from_rows([0b111, 0b101, 0b111, 0b001, 0b111]), // 9
    Glyph::from_rows([0b000, 0b000, 0b010, 0b000, 0b010]), // :
    Glyph::from_rows([0b000, 0b000, 0b000, 0b010, 0b100]), // ;
    Glyph::from_rows([0b001, 0b010, 0b100, 0b010, 0b001]), // <
    Glyph::from_rows([0b000, 0b111, 0b000, 0b111, 0b000]), // =
    Glyph::from_rows([0b100, 0b010, 0b001, 0b010, 0b100]), // >
    Glyph::from_rows([0b110, 0b001, 0b010, 0b000, 0b010]), // ?
    Glyph::from_rows([0b010, 0b101, 0b111, 0b100, 0b011]), // @
    Glyph::from_rows([0b111, 0b101, 0b111, 0b101, 0b101]), // A
    Glyph::from_rows([0b110, 0b101, 0b110, 0b101, 0b110]), // B
    Glyph::from_rows([0b011, 0b100, 0b100, 0b100, 0b011]), // C
    Glyph::from_rows([0b110, 0b101, 0b101, 0b101, 0b110]), // D
    Glyph::from_rows([0b111, 0b100, 0b111, 0b100, 0b111]), // E
    Glyph::from_rows([0b111, 0b100, 0b110, 0b100, 0b100]), // F
    Glyph::from_rows([0b011, 0b100, 0b101, 0b101, 0b010]), // G
    Glyph::from_rows([0b101, 0b101, 0b111, 0b101, 0b101]), // H
    Glyph::from_rows([0b010, 0b010, 0b010, 0b010, 0b010]), // I
    Glyph::from_rows([0b001, 0b001, 0b001, 0b101, 0b010]), // J
    Glyph::from_rows([0b101, 0b110, 0b100, 0b110, 0b101]), // K
    Glyph::from_rows([0b100, 0b100, 0b100, 0b100, 0b111]), // L
    Glyph::from_rows([0b101, 0b111, 0b101, 0b101, 0b101]), // M
    Glyph::from_rows([0b111, 0b101, 0b101, 0b101, 0b101]), // N
    Glyph::from_rows([0b010, 0b101, 0b101, 0b101, 0b010]), // O
    Glyph::from_rows([0b110, 0b101, 0b110, 0b100, 0b100]), // P
    Glyph::from_rows([0b010, 0b101, 0b101, 0b101, 0b011]), // Q
    Glyph::from_rows([0b110, 0b101, 0b110, 0b110, 0b101]), // R
    Glyph::from_rows([0b011, 0b100, 0b010, 0b001, 0b110]), // S
    Glyph::from_rows([0b111, 0b010, 0b010, 0b010, 0b010]), // T
    Glyph::from_rows([0b101, 0b101, 0b101, 0b101, 0b111]), // U
    Glyph::from_rows([0b101, 0b101, 0b101, 0b101, 0b010]), // V
    Glyph::from_rows([0b101, 0b101, 0b101, 0b111, 0b101]), // W
    Glyph::from_rows([0b101, 0b101, 0b010, 0b101, 0b101]), // X
    Glyph::from_rows([0b101, 0b101, 0b010, 0b010, 0b010]), // Y
    Glyph::from_rows([0b111, 0b001, 0b010, 0b100, 0b111]), // Z
    Glyph::from_rows([0b011, 0b010, 0b010, 0b010, 0b011]), // [
    Glyph::from_rows([0b100, 0b100, 0b010, 0b001, 0b001]), // \
    Glyph::from_rows([0b110, 0b010, 0b010, 0b010, 0b110]), // ]
    Glyph::from_rows([0b010, 0b101, 0b000, 0b000, 0b000]), // ^
    Glyph::from_rows([0b000, 0b000, 0b000, 0b000, 0b111]), // _
    Glyph::from_rows([0b100, 0b010, 0b000, 0b000, 0b000]), // `
    Glyph::from_rows([0b110, 0b001, 0b011, 0b101, 0b011]), // a
    Glyph::from_rows([0b100, 0b100, 0b110, 0b101, 0b110]), // b
    Glyph::from_rows([0b000, 0b011, 0b100, 0b100, 0b011]), // c
    Glyph::from_rows([0b001, 0b001, 0b011, 0b101, 0b011]), // d
    Glyph::from_rows([0b010, 0b101, 0b111, 0b100, 0b011]), // e
    Glyph::from_rows([0b011, 0b100, 0b110, 0b100, 0b100]), // f
    Glyph::from_rows([0b010, 0b101, 0b011, 0b001, 0b110]), // g
    Glyph::from_rows([0b100, 0b100, 0b110, 0b101, 0b101]), // h
    Glyph::from_rows([0b010, 0b000, 0b010, 0b010, 0b010]), // i
    Glyph::from_rows([0b001, 0b000, 0b001, 0b101, 0b010]), // j
    Glyph::from_rows([0b100, 0b100, 0b101, 0b110, 0b101]), // k
    Glyph::from_rows([0b100, 0b100, 0b100, 0b101, 0b110]), // l
    Glyph::from_rows([0b000, 0b101, 0b111, 0b101, 0b101]), // m
    Glyph::from_rows([0b000, 0b010, 0b101, 0b101, 0b101]), // n
    Glyph::from_rows([0b000, 0b010, 0b101, 0b101, 0b010]), // o
    Glyph::from_rows([0b010, 0b101, 0b110, 0b100, 0b100]), // p
    Glyph::from_rows([0b010, 0b101, 0b011, 0b001, 0b001]), // q
    Glyph::from_rows([0b000, 0b010, 0b101, 0b100, 0b100]), // r
    Glyph::from_rows([0b011, 0b100, 0b010, 0b001, 0b110]), // s
    Glyph::from_rows([0b010, 0b010, 0b111, 0b010, 0b010]), // t
    Glyph::from_rows([0b000, 0b101, 0b101, 0b101, 0b111]), // u
    Glyph::from_rows([0b000, 0b101, 0b101, 0b101, 0b010]), // v
    Glyph::from_rows([0b000, 0b101, 0b101, 0b111, 0b101]), // w
    Glyph::from_rows([0b000, 0b000, 0b101, 0b010, 0b101]), // x
    Glyph::from_rows([0b000, 0b101, 0b101, 0b010, 0b010]), // y
    Glyph::from_rows([0b000, 0b111, 0b001, 0b010, 0b111]), // z
    Glyph::from_rows([0b001, 0b010, 0b110, 0b010, 0b001]), // {
    Glyph::from_rows([0b010, 0b010, 0b010, 0b010, 0b010]), // |
    Glyph::from_rows([0b100, 0b010, 0b011, 0b010, 0b100]), // }
    Glyph::from_rows([0b000, 0b000, 0b101, 0b010, 0b000]), // ~
    Glyph::BLANK,
    Glyph::BLANK,
];
