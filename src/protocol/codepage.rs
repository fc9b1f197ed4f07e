//! # Code Page Text Encoding
//!
//! The SRP-350 prints single-byte text; which glyph a byte above 0x7F maps
//! to depends on the printer's selected code page. The default here is
//! CP437 (the IBM PC code page the printer ships with). ASCII passes
//! through unchanged in every code page; characters with no mapping are
//! replaced with `?`.

use tracing::warn;

/// Single-byte code pages supported by the text encoder.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Codepage {
    /// IBM Code Page 437 (printer power-on default)
    #[default]
    Cp437,
    /// Plain 7-bit ASCII; everything above U+007F becomes `?`
    Ascii,
}

impl Codepage {
    /// Encode a Unicode string into this code page's bytes.
    ///
    /// ## Example
    ///
    /// ```
    /// use tirilla::protocol::codepage::Codepage;
    ///
    /// assert_eq!(Codepage::Cp437.encode("Año"), vec![0x41, 0xA4, 0x6F]);
    /// assert_eq!(Codepage::Ascii.encode("Año"), vec![0x41, b'?', 0x6F]);
    /// ```
    pub fn encode(self, s: &str) -> Vec<u8> {
        let mut out = Vec::with_capacity(s.len());
        for ch in s.chars() {
            if (ch as u32) < 0x80 {
                out.push(ch as u8);
                continue;
            }
            let mapped = match self {
                Self::Cp437 => cp437_byte(ch),
                Self::Ascii => None,
            };
            match mapped {
                Some(byte) => out.push(byte),
                None => {
                    warn!(
                        codepage = ?self,
                        character = %ch,
                        codepoint = format_args!("U+{:04X}", ch as u32),
                        "unmapped character, replacing with '?'"
                    );
                    out.push(b'?');
                }
            }
        }
        out
    }
}

/// CP437 upper half in wire order: `CP437_HIGH[b - 0x80]` is the glyph for
/// byte `b`. Accented Latin, currency, box drawing, blocks, Greek and math.
const CP437_HIGH: [char; 128] = [
    // 0x80..0x8F
    'Ç', 'ü', 'é', 'â', 'ä', 'à', 'å', 'ç', 'ê', 'ë', 'è', 'ï', 'î', 'ì', 'Ä', 'Å',
    // 0x90..0x9F
    'É', 'æ', 'Æ', 'ô', 'ö', 'ò', 'û', 'ù', 'ÿ', 'Ö', 'Ü', '¢', '£', '¥', '₧', 'ƒ',
    // 0xA0..0xAF
    'á', 'í', 'ó', 'ú', 'ñ', 'Ñ', 'ª', 'º', '¿', '⌐', '¬', '½', '¼', '¡', '«', '»',
    // 0xB0..0xBF
    '░', '▒', '▓', '│', '┤', '╡', '╢', '╖', '╕', '╣', '║', '╗', '╝', '╜', '╛', '┐',
    // 0xC0..0xCF
    '└', '┴', '┬', '├', '─', '┼', '╞', '╟', '╚', '╔', '╩', '╦', '╠', '═', '╬', '╧',
    // 0xD0..0xDF
    '╨', '╤', '╥', '╙', '╘', '╒', '╓', '╫', '╪', '┘', '┌', '█', '▄', '▌', '▐', '▀',
    // 0xE0..0xEF
    'α', 'ß', 'Γ', 'π', 'Σ', 'σ', 'µ', 'τ', 'Φ', 'Θ', 'Ω', 'δ', '∞', 'φ', 'ε', '∩',
    // 0xF0..0xFF
    '≡', '±', '≥', '≤', '⌠', '⌡', '÷', '≈', '°', '∙', '·', '√', 'ⁿ', '²', '■', '\u{00A0}',
];

/// Map a non-ASCII character to its CP437 byte, if it has one.
fn cp437_byte(ch: char) -> Option<u8> {
    CP437_HIGH
        .iter()
        .position(|&c| c == ch)
        .map(|i| (i + 0x80) as u8)
}
