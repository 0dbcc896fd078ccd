// crates/litpack-core/src/escape.rs
//
// Bytewise escaping for C string literal bodies.
// Rules, applied left to right (no lookahead, no state):
// - ASCII 0x20..=0x7E except '"' passes through unescaped.
// - 0x0A becomes the two-character sequence \n.
// - Everything else (including '"') becomes a lowercase \x hex escape.

const HEX: &[u8; 16] = b"0123456789abcdef";

/// Hex escape digit width.
///
/// `Compat` reproduces the classic packer output byte-for-byte: escapes
/// carry no zero padding (`\x0`..`\xff`), so an escape followed by a
/// literal hex-digit character is mis-lexed by compilers that keep
/// consuming digits. `Padded` always emits two digits (`\x00`..`\xff`).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum EscapeStyle {
    #[default]
    Padded,
    Compat,
}

/// True for bytes emitted as-is: printable ASCII minus the double quote.
///
/// The range is fixed at 0x20..=0x7E on purpose; a Unicode or locale
/// printability class would make the output depend on the environment.
#[inline]
pub fn is_plain(b: u8) -> bool {
    (0x20..=0x7E).contains(&b) && b != b'"'
}

/// True for bytes that take the `\x` form: neither plain nor newline.
#[inline]
pub fn is_hex_escaped(b: u8) -> bool {
    !is_plain(b) && b != b'\n'
}

/// Append the escaped form of one byte to `out`.
pub fn escape_byte(style: EscapeStyle, b: u8, out: &mut String) {
    if is_plain(b) {
        out.push(b as char);
    } else if b == b'\n' {
        out.push_str("\\n");
    } else {
        push_hex_escape(style, b, out);
    }
}

/// Append the escaped literal body for `data` to `out`.
/// Every byte value 0..=255 has an encoding; this cannot fail.
pub fn escape_into(style: EscapeStyle, data: &[u8], out: &mut String) {
    for &b in data {
        escape_byte(style, b, out);
    }
}

fn push_hex_escape(style: EscapeStyle, b: u8, out: &mut String) {
    out.push_str("\\x");
    let hi = b >> 4;
    if hi != 0 || style == EscapeStyle::Padded {
        out.push(HEX[hi as usize] as char);
    }
    out.push(HEX[(b & 0x0F) as usize] as char);
}
