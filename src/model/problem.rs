use serde::{Deserialize, Serialize};

use super::Configuration;
use crate::geom::Rect;

/// One problem instance: the vessel count, the endpoint configurations and
/// the obstacle field. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Problem {
    pub asv_count: usize,
    pub initial: Configuration,
    pub goal: Configuration,
    pub obstacles: Vec<Rect>,
}

impl Problem {
    pub fn new(
        asv_count: usize,
        initial: Configuration,
        goal: Configuration,
        obstacles: Vec<Rect>,
    ) -> Self {
        Self {
            asv_count,
            initial,
            goal,
            obstacles,
        }
    }
}
