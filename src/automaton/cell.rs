//! Cell state and the birth-detection assignment rule

use serde::{Deserialize, Serialize};

/// Observable state of a single cell.
///
/// `Emerging` marks a cell that came alive in the most recent update. It is
/// a display distinction only: every rule evaluation treats it exactly like
/// `Living`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    Dead,
    Living,
    Emerging,
}

impl Status {
    /// Whether this status counts as alive for neighbor counting and
    /// survival checks.
    pub fn is_alive(self) -> bool {
        matches!(self, Status::Living | Status::Emerging)
    }
}

/// One grid position's state holder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Cell {
    status: Status,
}

impl Cell {
    /// Current stored status.
    pub fn status(&self) -> Status {
        self.status
    }

    /// Store a new status, detecting births along the way: assigning a live
    /// status to a cell that was `Dead` stores `Emerging` instead, so the
    /// renderer can single out cells born this generation. Assigning a live
    /// status to a cell that was already alive stores `Living` (no re-birth
    /// marking). Assigning `Dead` always stores `Dead`.
    pub fn set_status(&mut self, status: Status) {
        self.status = match status {
            Status::Dead => Status::Dead,
            Status::Living | Status::Emerging => {
                if self.status == Status::Dead {
                    Status::Emerging
                } else {
                    Status::Living
                }
            }
        };
    }

    /// Overwrite the stored status with no birth detection. Bulk fills are
    /// baseline initialization, not simulation, so they take this path.
    pub(crate) fn overwrite(&mut self, status: Status) {
        self.status = status;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_dead() {
        assert_eq!(Cell::default().status(), Status::Dead);
    }

    #[test]
    fn test_birth_from_dead_is_marked_emerging() {
        let mut cell = Cell::default();
        cell.set_status(Status::Living);
        assert_eq!(cell.status(), Status::Emerging);
    }

    #[test]
    fn test_surviving_cell_settles_to_living() {
        let mut cell = Cell::default();
        cell.set_status(Status::Living);
        assert_eq!(cell.status(), Status::Emerging);

        // Next live assignment finds the cell already alive
        cell.set_status(Status::Living);
        assert_eq!(cell.status(), Status::Living);

        cell.set_status(Status::Living);
        assert_eq!(cell.status(), Status::Living);
    }

    #[test]
    fn test_kill_always_stores_dead() {
        let mut cell = Cell::default();
        cell.set_status(Status::Living);
        cell.set_status(Status::Dead);
        assert_eq!(cell.status(), Status::Dead);

        // Killing an already-dead cell is a no-op
        cell.set_status(Status::Dead);
        assert_eq!(cell.status(), Status::Dead);
    }

    #[test]
    fn test_assigning_emerging_normalizes_like_living() {
        let mut cell = Cell::default();
        cell.set_status(Status::Emerging);
        assert_eq!(cell.status(), Status::Emerging);

        cell.set_status(Status::Emerging);
        assert_eq!(cell.status(), Status::Living);
    }

    #[test]
    fn test_overwrite_bypasses_birth_detection() {
        let mut cell = Cell::default();
        cell.overwrite(Status::Living);
        assert_eq!(cell.status(), Status::Living);

        cell.overwrite(Status::Dead);
        assert_eq!(cell.status(), Status::Dead);
    }

    #[test]
    fn test_liveness() {
        assert!(!Status::Dead.is_alive());
        assert!(Status::Living.is_alive());
        assert!(Status::Emerging.is_alive());
    }
}
