use ratatui::layout::{Position, Rect};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    Form,
    SelectProject,
}

/// Tab stops on the form row, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusedField {
    Project,
    Duration,
    Submit,
    Clear,
}

/// Open/closed state of the quick-duration popover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PresetPopover {
    #[default]
    Closed,
    Open {
        highlighted: usize,
    },
}

impl PresetPopover {
    pub fn is_open(&self) -> bool {
        matches!(self, PresetPopover::Open { .. })
    }

    pub fn highlighted(&self) -> Option<usize> {
        match self {
            PresetPopover::Open { highlighted } => Some(*highlighted),
            PresetPopover::Closed => None,
        }
    }

    pub fn toggle(&mut self) {
        *self = match self {
            PresetPopover::Closed => PresetPopover::Open { highlighted: 0 },
            PresetPopover::Open { .. } => PresetPopover::Closed,
        };
    }

    pub fn close(&mut self) {
        *self = PresetPopover::Closed;
    }

    /// Move the highlight with wrap-around. No-op while closed.
    pub fn move_highlight(&mut self, down: bool, len: usize) {
        if let PresetPopover::Open { highlighted } = self {
            if len == 0 {
                return;
            }
            *highlighted = if down {
                (*highlighted + 1) % len
            } else if *highlighted == 0 {
                len - 1
            } else {
                *highlighted - 1
            };
        }
    }
}

/// Screen regions from the last rendered frame, used to route mouse clicks.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitAreas {
    pub project_field: Rect,
    pub duration_field: Rect,
    pub preset_toggle: Rect,
    /// Duration field plus its toggle. Clicks here never dismiss the popover.
    pub duration_region: Rect,
    pub popover: Option<Rect>,
    pub preset_rows: Vec<Rect>,
    pub submit_button: Rect,
    pub clear_button: Option<Rect>,
}

impl HitAreas {
    /// True when `pos` is outside both the duration region and the open popover.
    pub fn is_outside_preset_region(&self, pos: Position) -> bool {
        !self.duration_region.contains(pos) && !self.popover.is_some_and(|r| r.contains(pos))
    }

    pub fn preset_row_at(&self, pos: Position) -> Option<usize> {
        self.preset_rows.iter().position(|r| r.contains(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn popover_toggles_and_wraps_highlight() {
        let mut popover = PresetPopover::default();
        assert!(!popover.is_open());

        popover.toggle();
        assert_eq!(popover.highlighted(), Some(0));
        popover.move_highlight(false, 4);
        assert_eq!(popover.highlighted(), Some(3));
        popover.move_highlight(true, 4);
        assert_eq!(popover.highlighted(), Some(0));

        popover.toggle();
        assert_eq!(popover, PresetPopover::Closed);
    }

    #[test]
    fn move_highlight_while_closed_stays_closed() {
        let mut popover = PresetPopover::Closed;
        popover.move_highlight(true, 4);
        assert_eq!(popover, PresetPopover::Closed);
    }

    #[test]
    fn outside_region_excludes_field_and_popover() {
        let areas = HitAreas {
            duration_region: Rect::new(10, 2, 20, 3),
            popover: Some(Rect::new(10, 5, 20, 6)),
            ..HitAreas::default()
        };
        assert!(!areas.is_outside_preset_region(Position::new(12, 3)));
        assert!(!areas.is_outside_preset_region(Position::new(12, 7)));
        assert!(areas.is_outside_preset_region(Position::new(2, 3)));
        assert!(areas.is_outside_preset_region(Position::new(12, 20)));
    }
}
