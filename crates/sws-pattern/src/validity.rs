use sws_core::Throw;

/// Returns whether `throws` describes a juggleable vanilla pattern: the
/// average throw is a whole number of balls and no two throws land on the
/// same beat. Empty sequences are never valid.
pub fn is_valid(throws: &[Throw]) -> bool {
    let len = throws.len();
    if len == 0 {
        return false;
    }
    let sum: u64 = throws.iter().map(|&height| u64::from(height)).sum();
    if sum % len as u64 != 0 {
        return false;
    }

    let mut landed = vec![false; len];
    for (beat, &height) in throws.iter().enumerate() {
        let landing = ((beat as u64 + u64::from(height)) % len as u64) as usize;
        if std::mem::replace(&mut landed[landing], true) {
            return false;
        }
    }
    true
}

/// Number of balls juggled by a valid pattern (`sum / len`).
pub fn ball_count(throws: &[Throw]) -> Option<Throw> {
    if !is_valid(throws) {
        return None;
    }
    let sum: u64 = throws.iter().map(|&height| u64::from(height)).sum();
    Throw::try_from(sum / throws.len() as u64).ok()
}
