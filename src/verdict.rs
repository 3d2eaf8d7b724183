//! Per-letter scoring of a guess against the hidden target.
//!
//! The scheme is position-then-membership: an exact positional match is
//! `Correct`, a letter that appears anywhere else in the target is
//! `WrongPosition`, everything else is `Absent`. Positions the guess never
//! filled in (a row force-submitted by the countdown can be short, or empty)
//! are `Empty`.
//!
//! Note that membership is not count-corrected: guessing the same letter more
//! times than the target contains it still marks every occurrence `Correct` or
//! `WrongPosition`. That is the game's observable behavior, so keep it.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LetterVerdict {
    Correct,
    WrongPosition,
    Absent,
    Empty,
}

/// Score `guess` against `target`, one verdict per target position.
///
/// `guess` may be shorter than the target (missing positions are `Empty`);
/// it is never longer, because the session caps the row buffer. Winning is a
/// separate whole-string equality check in the session, not derived from the
/// verdicts returned here.
pub fn evaluate(guess: &str, target: &str) -> Vec<LetterVerdict> {
    let target_chars: Vec<char> = target.chars().collect();
    let guess_chars: Vec<char> = guess.chars().collect();

    target_chars
        .iter()
        .enumerate()
        .map(|(i, &expected)| match guess_chars.get(i) {
            None => LetterVerdict::Empty,
            Some(&c) if c == expected => LetterVerdict::Correct,
            Some(&c) if target_chars.contains(&c) => LetterVerdict::WrongPosition,
            Some(_) => LetterVerdict::Absent,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use LetterVerdict::*;

    #[test]
    fn full_match_is_all_correct() {
        assert_eq!(
            evaluate("CHAPA", "CHAPA"),
            vec![Correct, Correct, Correct, Correct, Correct]
        );
    }

    #[test]
    fn mixed_verdicts() {
        // T matches in place, E is elsewhere in the target, A/R/S are absent
        assert_eq!(
            evaluate("TARES", "TECLO"),
            vec![Correct, Absent, Absent, WrongPosition, Absent]
        );
    }

    #[test]
    fn all_absent() {
        assert_eq!(
            evaluate("MUNDO", "FICHA"),
            vec![Absent, Absent, Absent, Absent, Absent]
        );
    }

    #[test]
    fn short_guess_pads_with_empty() {
        assert_eq!(
            evaluate("CHA", "CHAPA"),
            vec![Correct, Correct, Correct, Empty, Empty]
        );
    }

    #[test]
    fn empty_guess_is_all_empty() {
        assert_eq!(evaluate("", "CHAPA"), vec![Empty; 5]);
    }

    #[test]
    fn duplicate_letters_are_not_count_corrected() {
        // CHAPA has two As; five As still score two Correct and three
        // WrongPosition, not Absent for the surplus. Intentional.
        assert_eq!(
            evaluate("AAAAA", "CHAPA"),
            vec![WrongPosition, WrongPosition, Correct, WrongPosition, Correct]
        );
    }

    #[test]
    fn enie_compares_by_char_not_byte() {
        assert_eq!(
            evaluate("SUEÑO", "SUEÑO"),
            vec![Correct, Correct, Correct, Correct, Correct]
        );
        assert_eq!(evaluate("ÑOÑOS", "SUEÑO")[0], WrongPosition);
    }
}
