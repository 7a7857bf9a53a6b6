//! Assertion helpers for `TestCityscape` integration tests.

use super::TestCityscape;

impl TestCityscape {
    /// Assert the number of buildings and roads currently in the world.
    pub fn assert_object_counts(&mut self, buildings: usize, roads: usize) {
        let b = self.building_count();
        let r = self.road_count();
        assert_eq!(
            (b, r),
            (buildings, roads),
            "Expected {buildings} buildings and {roads} roads, found {b} and {r}"
        );
    }

    /// Assert every building has settled at exactly its target height with
    /// unit X/Z scale.
    pub fn assert_all_settled(&mut self) {
        for b in self.buildings() {
            assert_eq!(
                b.scale.y, b.target_height,
                "Building {:?} at height {} instead of target {}",
                b.grid, b.scale.y, b.target_height
            );
            assert_eq!(b.scale.x, 1.0, "Building {:?} X scale changed", b.grid);
            assert_eq!(b.scale.z, 1.0, "Building {:?} Z scale changed", b.grid);
        }
    }

    /// Assert no generation wave is running.
    pub fn assert_idle(&self) {
        let state = self.generation_state();
        assert!(!state.in_progress, "Expected generation to be finished");
        assert!(state.active.is_none(), "Expected no active wave handle");
    }
}
