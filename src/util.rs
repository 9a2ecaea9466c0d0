/// Finds the length of the common prefix between a key and a branch label.
///
/// Returns the number of symbols that match starting from the given offset
/// into `key`.
pub fn prefix_match(key: &[char], start_idx: usize, label: &[char]) -> usize {
    let rest = key.get(start_idx..).unwrap_or(&[]);

    rest.iter()
        .zip(label)
        .take_while(|(a, b)| a == b)
        .count()
}
