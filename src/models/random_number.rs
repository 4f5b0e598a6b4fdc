use rand::Rng;
use serde::Serialize;

pub const RANGE_MIN: u8 = 1;
pub const RANGE_MAX: u8 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Band {
    Low,
    Middle,
    High,
    VeryHigh,
}

impl Band {
    pub fn of(number: u8) -> Self {
        match number {
            0..=25 => Band::Low,
            26..=50 => Band::Middle,
            51..=75 => Band::High,
            _ => Band::VeryHigh,
        }
    }

    pub fn emoji(&self) -> &'static str {
        match self {
            Band::Low => "🔥",
            Band::Middle => "⚡",
            Band::High => "💫",
            Band::VeryHigh => "🌟",
        }
    }

    pub fn message(&self) -> &'static str {
        match self {
            Band::Low => "Low number!",
            Band::Middle => "Right in the middle!",
            Band::High => "High number!",
            Band::VeryHigh => "Super high!",
        }
    }
}

/// State of the lucky-number widget between draws.
#[derive(Debug, Clone, Default)]
pub struct RandomNumber {
    current: Option<u8>,
    generating: bool,
    draws: u32,
}

impl RandomNumber {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number to show, if any. Hidden while a draw is in progress.
    pub fn current(&self) -> Option<u8> {
        if self.generating {
            None
        } else {
            self.current
        }
    }

    pub fn is_generating(&self) -> bool {
        self.generating
    }

    pub fn draws(&self) -> u32 {
        self.draws
    }

    pub fn begin(&mut self) {
        self.generating = true;
    }

    pub fn finish<R: Rng>(&mut self, rng: &mut R) -> u8 {
        let number = rng.gen_range(RANGE_MIN..=RANGE_MAX);
        self.current = Some(number);
        self.generating = false;
        self.draws += 1;
        number
    }
}
