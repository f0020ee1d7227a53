//! Conway's transition rule (B3/S23)

const BIRTH: [u8; 1] = [3];
const SURVIVAL: [u8; 2] = [2, 3];

/// Game of Life rules engine
pub struct GameOfLifeRules;

impl GameOfLifeRules {
    /// Check if a cell should be alive in the next generation given its current state and neighbor count
    #[inline]
    pub fn should_be_alive(current_state: bool, neighbor_count: u8) -> bool {
        let counts: &[u8] = if current_state {
            Self::survival_neighbor_counts()
        } else {
            Self::birth_neighbor_counts()
        };
        counts.contains(&neighbor_count)
    }

    /// Neighbor counts that turn a dead cell alive
    pub fn birth_neighbor_counts() -> &'static [u8] {
        &BIRTH
    }

    /// Neighbor counts that keep a live cell alive
    pub fn survival_neighbor_counts() -> &'static [u8] {
        &SURVIVAL
    }

    /// Maximum neighbor count in the Moore neighborhood
    pub fn max_neighbor_count() -> u8 {
        8
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rule_logic() {
        assert!(GameOfLifeRules::should_be_alive(true, 2));
        assert!(GameOfLifeRules::should_be_alive(true, 3));
        assert!(GameOfLifeRules::should_be_alive(false, 3));
        assert!(!GameOfLifeRules::should_be_alive(true, 1));
        assert!(!GameOfLifeRules::should_be_alive(true, 4));
        assert!(!GameOfLifeRules::should_be_alive(false, 2));
        assert!(!GameOfLifeRules::should_be_alive(false, 4));
    }

    #[test]
    fn test_full_rule_table() {
        let alive_next: Vec<(bool, u8)> = [false, true]
            .into_iter()
            .flat_map(|state| (0..=GameOfLifeRules::max_neighbor_count()).map(move |n| (state, n)))
            .filter(|&(state, n)| GameOfLifeRules::should_be_alive(state, n))
            .collect();
        assert_eq!(alive_next, vec![(false, 3), (true, 2), (true, 3)]);
    }
}
