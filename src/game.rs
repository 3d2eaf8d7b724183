use crate::verdict::{evaluate, LetterVerdict};
use crate::words::is_guessable_char;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Normalized input token handed to the session by the key adapter.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum KeyToken {
    Char(char),
    Backspace,
    Enter,
}

/// Terminal signal for the host shell, emitted by the transition that ended
/// the game. `Lost` carries the target so the shell can show it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GameSignal {
    Won,
    Lost { target: String },
}

/// Read-only view of the session for rendering. The in-progress buffer is
/// appended as a virtual last row while the game is running.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Snapshot {
    pub rows: Vec<String>,
    pub current_row: usize,
    pub time_remaining: u32,
    pub status: GameStatus,
}

/// One game: hidden target, submitted rows, the active row buffer and its
/// countdown. Mutated only through `press_key` and `tick`; replaced wholesale
/// on restart.
///
/// Invariants: `submitted.len() == current_row` in every observable state
/// (terminal submissions advance the row index too), and
/// `current_row <= max_attempts`.
#[derive(Debug)]
pub struct GameSession {
    target: String,
    word_length: usize,
    max_attempts: usize,
    time_per_row: u32,
    submitted: Vec<String>,
    current_guess: String,
    current_row: usize,
    time_remaining: u32,
    status: GameStatus,
}

impl GameSession {
    pub fn new(target: String, max_attempts: usize, time_per_row: u32) -> Self {
        let word_length = target.chars().count();
        Self {
            target,
            word_length,
            max_attempts,
            time_per_row,
            submitted: vec![],
            current_guess: String::new(),
            current_row: 0,
            time_remaining: time_per_row,
            status: GameStatus::InProgress,
        }
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn word_length(&self) -> usize {
        self.word_length
    }

    pub fn max_attempts(&self) -> usize {
        self.max_attempts
    }

    pub fn time_remaining(&self) -> u32 {
        self.time_remaining
    }

    /// The target word, revealed only once the game is over.
    pub fn revealed_target(&self) -> Option<&str> {
        match self.status {
            GameStatus::InProgress => None,
            GameStatus::Won | GameStatus::Lost => Some(&self.target),
        }
    }

    /// Apply one input token. Unsupported characters, overflow past the row
    /// length, Enter on an incomplete row and any input after the game ended
    /// are absorbed silently.
    pub fn press_key(&mut self, token: KeyToken) -> Option<GameSignal> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        // Independent of the status check: a full board accepts nothing.
        if self.submitted.len() >= self.max_attempts {
            return None;
        }

        match token {
            KeyToken::Char(c) => {
                if is_guessable_char(c) && self.current_guess.chars().count() < self.word_length {
                    self.current_guess.push(c);
                }
                None
            }
            KeyToken::Backspace => {
                self.current_guess.pop();
                None
            }
            KeyToken::Enter => {
                if self.current_guess.chars().count() == self.word_length {
                    self.submit()
                } else {
                    None
                }
            }
        }
    }

    /// One second elapsed on the active row. When the countdown hits zero the
    /// row is force-submitted with whatever was buffered, even nothing.
    pub fn tick(&mut self) -> Option<GameSignal> {
        if self.status != GameStatus::InProgress {
            return None;
        }
        if self.submitted.len() >= self.max_attempts {
            return None;
        }

        self.time_remaining = self.time_remaining.saturating_sub(1);
        if self.time_remaining == 0 {
            self.submit()
        } else {
            None
        }
    }

    fn submit(&mut self) -> Option<GameSignal> {
        let guess = std::mem::take(&mut self.current_guess);
        let won = guess == self.target;
        self.submitted.push(guess);
        self.current_row += 1;

        if won {
            self.status = GameStatus::Won;
            Some(GameSignal::Won)
        } else if self.current_row >= self.max_attempts {
            self.status = GameStatus::Lost;
            Some(GameSignal::Lost {
                target: self.target.clone(),
            })
        } else {
            self.time_remaining = self.time_per_row;
            None
        }
    }

    /// Verdicts for one displayed row. Submitted rows are scored against the
    /// target; the active row is scored live once it is non-empty; everything
    /// below renders as `Empty` cells.
    pub fn row_verdicts(&self, row: usize) -> Vec<LetterVerdict> {
        if row < self.submitted.len() {
            evaluate(&self.submitted[row], &self.target)
        } else if row == self.current_row
            && self.status == GameStatus::InProgress
            && !self.current_guess.is_empty()
        {
            evaluate(&self.current_guess, &self.target)
        } else {
            vec![LetterVerdict::Empty; self.word_length]
        }
    }

    pub fn snapshot(&self) -> Snapshot {
        let mut rows = self.submitted.clone();
        if self.status == GameStatus::InProgress {
            rows.push(self.current_guess.clone());
        }
        Snapshot {
            rows,
            current_row: self.current_row,
            time_remaining: self.time_remaining,
            status: self.status,
        }
    }
}
