/// Hashes a string to a non-negative 32-bit integer.
///
/// This is the classic `h = h * 31 + c` string hash over UTF-16 code units,
/// carried in a wrapping `i32` so the two's-complement overflow matches every
/// other implementation bit for bit. The absolute value is taken at the end;
/// `i32::MIN` maps to `2^31`, which is why the result is a `u32`.
pub fn hash_string(text: &str) -> u32 {
    let mut hash: i32 = 0;
    for unit in text.encode_utf16() {
        hash = hash.wrapping_mul(31).wrapping_add(unit as i32);
    }
    hash.unsigned_abs()
}
