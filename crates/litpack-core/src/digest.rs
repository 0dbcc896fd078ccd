// crates/litpack-core/src/digest.rs
//
// Content identity for packed inputs. Reported next to each declaration
// so an operator can tell which version of a resource got embedded.

pub fn crc32(bytes: &[u8]) -> u32 {
    let mut h = crc32fast::Hasher::new();
    h.update(bytes);
    h.finalize()
}

pub fn blake3_16(bytes: &[u8]) -> [u8; 16] {
    let hash = blake3::hash(bytes);
    let mut out = [0u8; 16];
    out.copy_from_slice(&hash.as_bytes()[0..16]);
    out
}

/// 16-byte blake3 prefix rendered as 32 lowercase hex chars.
pub fn short_id(bytes: &[u8]) -> String {
    hex16(&blake3_16(bytes))
}

fn hex16(id: &[u8; 16]) -> String {
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut s = String::with_capacity(32);
    for &b in id {
        s.push(HEX[(b >> 4) as usize] as char);
        s.push(HEX[(b & 0x0F) as usize] as char);
    }
    s
}
