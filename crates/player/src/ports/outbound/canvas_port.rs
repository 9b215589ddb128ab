//! Scene canvas port

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CanvasPoint {
    pub x: f64,
    pub y: f64,
}

/// A token placed on the active scene
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CanvasToken {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub img: String,
    pub center: CanvasPoint,
}

#[cfg_attr(test, mockall::automock)]
pub trait CanvasPort: Send + Sync {
    /// Tokens on the active scene, empty when no scene is viewed
    fn token_placeables(&self) -> Vec<CanvasToken>;

    fn ping(&self, point: CanvasPoint);
}
