//! Per-frame ordering via `SystemSet` phases.
//!
//! ```text
//! Input  →  Generation  →  Animation
//! ```
//!
//! * **Input** – Turning key presses into [`RegenerateCity`] requests.
//! * **Generation** – Handling requests, then advancing the layout wave.
//! * **Animation** – Stepping building height animators.
//!
//! Commands are flushed between the phases, so a building despawned by a
//! regeneration is already gone when the animators run. A new animator's
//! first sample is the building's initial height, so a freshly placed
//! building never shows anything but its initial height on the frame it
//! appears.
//!
//! [`RegenerateCity`]: crate::regeneration::RegenerateCity

use bevy::prelude::*;

/// Ordered phases for systems running in the `Update` schedule.
#[derive(SystemSet, Debug, Clone, PartialEq, Eq, Hash)]
pub enum CityscapeSet {
    /// Per-frame input processing.
    Input,
    /// Regeneration requests and the layout wave.
    Generation,
    /// Height animation.
    Animation,
}
