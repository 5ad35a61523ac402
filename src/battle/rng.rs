use rand::Rng;

/// RNG oracle for one battle. Production battles draw from thread-local
/// entropy; tests script the exact outcomes. Every consumption names the
/// roll it feeds, so an exhausted script points at the check that ate it.
#[derive(Debug, Clone)]
pub enum BattleRng {
    Entropy,
    Scripted { outcomes: Vec<u8>, index: usize },
}

impl BattleRng {
    pub fn new_random() -> Self {
        BattleRng::Entropy
    }

    pub fn new_for_test(outcomes: Vec<u8>) -> Self {
        BattleRng::Scripted { outcomes, index: 0 }
    }

    /// A percent roll in 1..=100.
    pub fn percent(&mut self, reason: &str) -> u8 {
        match self {
            BattleRng::Entropy => rand::rng().random_range(1..=100),
            BattleRng::Scripted { outcomes, index } => next_scripted(outcomes, index, reason),
        }
    }

    /// A uniform index in 0..len. Scripted values are taken modulo `len`.
    pub fn pick(&mut self, len: usize, reason: &str) -> usize {
        assert!(len > 0, "Tried to pick from an empty range for: '{}'", reason);
        match self {
            BattleRng::Entropy => rand::rng().random_range(0..len),
            BattleRng::Scripted { outcomes, index } => {
                next_scripted(outcomes, index, reason) as usize % len
            }
        }
    }
}

fn next_scripted(outcomes: &[u8], index: &mut usize, reason: &str) -> u8 {
    if *index >= outcomes.len() {
        // Add the reason to the panic message for better debugging!
        panic!(
            "BattleRng exhausted! Tried to get a value for: '{}'. Need more scripted values.",
            reason
        );
    }
    let outcome = outcomes[*index];

    // Print the consumption event to the console during tests.
    #[cfg(test)]
    println!("[RNG] Consumed {} for: {}", outcome, reason);

    *index += 1;
    outcome
}
