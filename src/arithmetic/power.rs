/// Raises `a` to the integer power `n` by repeated squaring.
///
/// Uses `O(log |n|)` multiplications. A negative `n` returns `1 / a^|n|`,
/// so `fast_power(0.0, -1)` is `inf`.
pub fn fast_power(mut a: f64, n: i64) -> f64 {
    let mut e = n.unsigned_abs();
    let mut w = 1.0;
    while e != 0 {
        if e & 1 == 1 {
            w *= a;
        }
        a *= a;
        e >>= 1;
    }
    if n < 0 { 1.0 / w } else { w }
}
