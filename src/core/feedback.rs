//! Visual feedback variants
//!
//! The mascot picture and the row of hearts are chosen from the round state by
//! plain functions, so any front-end can draw them its own way.

use super::GameState;

/// Mascot picture for the current round
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Mascot {
    /// Full (or nearly full) attempts
    Calm,
    /// Three or four attempts left
    Worried,
    /// Two attempts left
    Nervous,
    /// One attempt left
    Desperate,
    /// Round won
    Celebrating,
    /// Round lost
    Defeated,
}

impl Mascot {
    /// Pick the mascot for a number of remaining attempts
    ///
    /// # Examples
    /// ```
    /// use forca::core::Mascot;
    ///
    /// assert_eq!(Mascot::for_state(6, false), Mascot::Calm);
    /// assert_eq!(Mascot::for_state(1, false), Mascot::Desperate);
    /// assert_eq!(Mascot::for_state(0, true), Mascot::Defeated);
    /// ```
    #[must_use]
    pub const fn for_state(remaining_attempts: u8, game_over: bool) -> Self {
        match (game_over, remaining_attempts) {
            (true, 0) => Self::Defeated,
            (true, _) => Self::Celebrating,
            (false, 3..=4) => Self::Worried,
            (false, 2) => Self::Nervous,
            (false, 1) => Self::Desperate,
            (false, _) => Self::Calm,
        }
    }

    /// Mascot for a round
    #[must_use]
    pub const fn for_round(state: &GameState) -> Self {
        Self::for_state(state.remaining_attempts(), state.is_game_over())
    }

    /// Image asset drawn for this mascot in the web version
    #[must_use]
    pub const fn asset_name(self) -> &'static str {
        match self {
            Self::Calm => "caco1.png",
            Self::Worried => "caco6.png",
            Self::Nervous => "caco4.png",
            Self::Desperate => "caco7.gif",
            Self::Celebrating => "caco3.png",
            Self::Defeated => "caco5.png",
        }
    }

    /// Terminal stand-in for the picture
    #[must_use]
    pub const fn face(self) -> &'static str {
        match self {
            Self::Calm => "(^_^)",
            Self::Worried => "(o_o)",
            Self::Nervous => "(O_O;)",
            Self::Desperate => "(>_<)!!",
            Self::Celebrating => "\\(^o^)/",
            Self::Defeated => "(x_x)",
        }
    }
}

/// One heart of the attempts row
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heart {
    Full,
    Broken,
}

impl Heart {
    #[must_use]
    pub const fn for_filled(filled: bool) -> Self {
        if filled { Self::Full } else { Self::Broken }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Full => '♥',
            Self::Broken => '♡',
        }
    }
}

/// Row of `max_attempts` hearts, the first `remaining_attempts` of them full
#[must_use]
pub fn hearts(remaining_attempts: u8, max_attempts: u8) -> Vec<Heart> {
    (0..max_attempts)
        .map(|i| Heart::for_filled(i < remaining_attempts))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::WordEntry;

    #[test]
    fn mascot_buckets_while_playing() {
        assert_eq!(Mascot::for_state(6, false), Mascot::Calm);
        assert_eq!(Mascot::for_state(5, false), Mascot::Calm);
        assert_eq!(Mascot::for_state(4, false), Mascot::Worried);
        assert_eq!(Mascot::for_state(3, false), Mascot::Worried);
        assert_eq!(Mascot::for_state(2, false), Mascot::Nervous);
        assert_eq!(Mascot::for_state(1, false), Mascot::Desperate);
    }

    #[test]
    fn mascot_on_game_over() {
        assert_eq!(Mascot::for_state(0, true), Mascot::Defeated);
        assert_eq!(Mascot::for_state(1, true), Mascot::Celebrating);
        assert_eq!(Mascot::for_state(6, true), Mascot::Celebrating);
    }

    #[test]
    fn mascot_assets_are_distinct() {
        let all = [
            Mascot::Calm,
            Mascot::Worried,
            Mascot::Nervous,
            Mascot::Desperate,
            Mascot::Celebrating,
            Mascot::Defeated,
        ];
        let names: std::collections::HashSet<_> = all.iter().map(|m| m.asset_name()).collect();
        assert_eq!(names.len(), all.len());
    }

    #[test]
    fn mascot_follows_round() {
        let mut state = GameState::new(WordEntry::new("racial", "").unwrap(), 6);
        assert_eq!(Mascot::for_round(&state), Mascot::Calm);
        for guess in ["x", "w", "k"] {
            state.submit_guess(guess);
        }
        assert_eq!(Mascot::for_round(&state), Mascot::Worried);
    }

    #[test]
    fn heart_variant() {
        assert_eq!(Heart::for_filled(true), Heart::Full);
        assert_eq!(Heart::for_filled(false), Heart::Broken);
    }

    #[test]
    fn hearts_row() {
        let row = hearts(4, 6);
        assert_eq!(row.len(), 6);
        assert_eq!(&row[..4], &[Heart::Full; 4]);
        assert_eq!(&row[4..], &[Heart::Broken; 2]);

        assert!(hearts(0, 6).iter().all(|&h| h == Heart::Broken));
        assert!(hearts(6, 6).iter().all(|&h| h == Heart::Full));
    }
}
