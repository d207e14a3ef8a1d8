// matcher.rs - Nearest-greater-index matching between two position lists

/// For each position `p` of `positions1`, the distance `q - p` to the smallest
/// `q` in `positions2` strictly greater than `p`.
///
/// Positions with no such `q` contribute nothing, so the result may be shorter
/// than `positions1`. Both inputs must be ascending; this is not re-checked.
/// The cursor into `positions2` only moves forward, giving a single
/// merge-style pass.
pub fn distances_to_next_greater(positions1: &[usize], positions2: &[usize]) -> Vec<usize> {
    let mut distances = Vec::with_capacity(positions1.len());
    let mut cursor = 0;

    for &p in positions1 {
        while cursor < positions2.len() && positions2[cursor] <= p {
            cursor += 1;
        }
        if cursor == positions2.len() {
            // every later p is larger still
            break;
        }
        distances.push(positions2[cursor] - p);
    }

    distances
}
