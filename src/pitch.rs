/// Classification of one character of a Retrosheet pitch-sequence string.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum PitchCall {
    HitByPitch,
    Ball,
    CalledStrike,
    Swing,
}

impl PitchCall {
    /// `None` for characters encoding non-pitch events (pickoff throws,
    /// runner markers, the `.` annotation separator).
    pub fn classify(c: char) -> Option<Self> {
        match c {
            'H' => Some(PitchCall::HitByPitch),
            // ball / intentional ball / pitchout
            'B' | 'I' | 'P' => Some(PitchCall::Ball),
            'C' => Some(PitchCall::CalledStrike),
            // foul / swinging strike / foul bunt / foul tip / in play
            'F' | 'S' | 'L' | 'T' | 'X' => Some(PitchCall::Swing),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PitchCall;

    #[test]
    fn test_classify() {
        assert_eq!(PitchCall::classify('H'), Some(PitchCall::HitByPitch));
        for c in "BIP".chars() {
            assert_eq!(PitchCall::classify(c), Some(PitchCall::Ball));
        }
        assert_eq!(PitchCall::classify('C'), Some(PitchCall::CalledStrike));
        for c in "FSLTX".chars() {
            assert_eq!(PitchCall::classify(c), Some(PitchCall::Swing));
        }
        // pickoff throws, runner-going marker, annotation separator
        for c in "123>.+*N".chars() {
            assert_eq!(PitchCall::classify(c), None);
        }
    }
}
