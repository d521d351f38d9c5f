use std::time::Duration;

/// Counts for various things which count, roughly.
pub struct Counters {
    /// A count of every flip made, over every search and sample.
    pub total_flips: usize,

    /// A count of every move made during the current search.
    ///
    /// A move is a step of the walk, and may flip one atom, or two within a block.
    pub total_moves: usize,

    /// A count of the greedy moves made during the current search.
    pub greedy_moves: usize,

    /// A count of the random moves made during the current search.
    pub random_moves: usize,

    /// The move at which the best world so far was found.
    pub best_move: usize,

    /// A count of moves since the last improvement to the best world.
    pub stall: usize,

    /// A count of the sub-searches dispatched while sampling.
    pub sub_searches: usize,

    /// The time taken during a search or a sampling run.
    pub time: Duration,
}

impl Default for Counters {
    fn default() -> Self {
        Counters {
            total_flips: 0,

            total_moves: 0,
            greedy_moves: 0,
            random_moves: 0,

            best_move: 0,
            stall: 0,

            sub_searches: 0,
            time: Duration::from_secs(0),
        }
    }
}
