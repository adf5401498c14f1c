//! Generation method selection.
//!
//! The two ways of producing the Sierpinski gasket: deterministic
//! recursive subdivision, and the stochastic chaos game.

/// Active generation method. Exactly one is active at a time; switching
/// always discards accumulated chaos-game state.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum GenerationMethod {
    /// Recursive midpoint subdivision down to the current depth
    Recursive,
    /// Iterated random midpoint mapping toward the attractor
    #[default]
    Chaos,
}

impl GenerationMethod {
    /// The other method (Space key flips between the two).
    pub const fn toggled(self) -> Self {
        match self {
            GenerationMethod::Recursive => GenerationMethod::Chaos,
            GenerationMethod::Chaos => GenerationMethod::Recursive,
        }
    }

    /// Display name for the HUD
    pub const fn name(&self) -> &'static str {
        match self {
            GenerationMethod::Recursive => "recursive",
            GenerationMethod::Chaos => "chaos",
        }
    }
}
