//! Names of the sprite-editor modifier actions.
//!
//! These actions are not dispatched on key-down. The sprite editor polls their
//! accelerators while the user drags, e.g. holding Shift to snap to the grid.

pub const COPY_SELECTION: &str = "CopySelection";
pub const SNAP_TO_GRID: &str = "SnapToGrid";
pub const ANGLE_SNAP: &str = "AngleSnap";
pub const MAINTAIN_ASPECT_RATIO: &str = "MaintainAspectRatio";
pub const LOCK_AXIS: &str = "LockAxis";
pub const ADD_SELECTION: &str = "AddSelection";
pub const SUBTRACT_SELECTION: &str = "SubtractSelection";

/// Every action the sprite editor knows how to poll.
pub const ALL: &[&str] = &[
    COPY_SELECTION,
    SNAP_TO_GRID,
    ANGLE_SNAP,
    MAINTAIN_ASPECT_RATIO,
    LOCK_AXIS,
    ADD_SELECTION,
    SUBTRACT_SELECTION,
];

pub fn is_known(name: &str) -> bool {
    ALL.contains(&name)
}
