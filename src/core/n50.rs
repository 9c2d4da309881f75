/// N50 of a set of read lengths: the length at which reads sorted longest
/// first first reach half of the total bases. Returns 0 for no reads.
///
/// Sorts `lengths` in place, descending.
///
/// The half-total threshold is exact: `running >= total / 2` is evaluated as
/// `2 * running >= total` in 128-bit integers, so odd totals are not rounded.
pub fn n50(lengths: &mut [u64]) -> u64 {
    if lengths.is_empty() {
        return 0;
    }
    lengths.sort_unstable_by(|a, b| b.cmp(a));
    let total: u128 = lengths.iter().map(|&l| l as u128).sum();
    let mut acc: u128 = 0;
    for &len in lengths.iter() {
        acc += len as u128;
        if 2 * acc >= total {
            return len;
        }
    }
    0
}
