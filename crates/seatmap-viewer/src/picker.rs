//! Quantity-constrained seat picking for the purchase flow.
//!
//! The picker owns which seats are chosen; the map's own statuses stay as
//! hydrated. [`SeatPicker::apply`] overlays the picks as `SELECCIONADO` for
//! display.

use seatmap_core::{ElementId, Result, Seat, SeatMapError, SeatStatus};

/// Outcome of a successful toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pick {
    Selected,
    Deselected,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatPicker {
    required: usize,
    picked: Vec<ElementId>,
}

impl SeatPicker {
    pub fn new(required: usize) -> Self {
        Self {
            required,
            picked: Vec::with_capacity(required),
        }
    }

    pub fn required(&self) -> usize {
        self.required
    }

    /// Picks in click order.
    pub fn picked(&self) -> &[ElementId] {
        &self.picked
    }

    pub fn remaining(&self) -> usize {
        self.required.saturating_sub(self.picked.len())
    }

    pub fn is_complete(&self) -> bool {
        self.picked.len() == self.required
    }

    pub fn is_picked(&self, id: ElementId) -> bool {
        self.picked.contains(&id)
    }

    /// Toggle `seat`, judged by its hydrated status. Only free seats can be
    /// picked; picking past the required quantity is refused.
    pub fn toggle(&mut self, seat: &Seat) -> Result<Pick> {
        if seat.status != SeatStatus::Free {
            return Err(SeatMapError::SeatUnavailable(seat.id));
        }
        if let Some(i) = self.picked.iter().position(|&id| id == seat.id) {
            self.picked.remove(i);
            log::debug!("released seat {} ({}/{})", seat.id, self.picked.len(), self.required);
            return Ok(Pick::Deselected);
        }
        if self.picked.len() >= self.required {
            log::warn!("seat {} refused: quota of {} reached", seat.id, self.required);
            return Err(SeatMapError::QuotaExceeded {
                required: self.required,
            });
        }
        self.picked.push(seat.id);
        log::debug!("picked seat {} ({}/{})", seat.id, self.picked.len(), self.required);
        Ok(Pick::Selected)
    }

    /// Look `id` up in `seats` and toggle it.
    pub fn toggle_id(&mut self, seats: &[Seat], id: ElementId) -> Result<Pick> {
        let seat = seats
            .iter()
            .find(|s| s.id == id)
            .ok_or(SeatMapError::UnknownSeat(id))?;
        self.toggle(seat)
    }

    /// The picks, once exactly the required number is chosen.
    pub fn confirm(&self) -> Result<&[ElementId]> {
        if !self.is_complete() {
            return Err(SeatMapError::SelectionIncomplete {
                selected: self.picked.len(),
                required: self.required,
            });
        }
        log::info!("confirmed {} seat(s)", self.picked.len());
        Ok(&self.picked)
    }

    /// Drop every pick; the seats show their hydrated status again.
    pub fn reset(&mut self) {
        self.picked.clear();
    }

    /// `seats` with every picked seat shown as selected.
    pub fn apply(&self, seats: &[Seat]) -> Vec<Seat> {
        seats
            .iter()
            .map(|seat| {
                let mut seat = seat.clone();
                if self.is_picked(seat.id) {
                    seat.status = SeatStatus::Selected;
                }
                seat
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn free(id: &str) -> Seat {
        Seat::new(ElementId::intern(id), 0.0, 0.0, id)
    }

    #[test]
    fn quota_is_enforced() {
        let mut picker = SeatPicker::new(2);
        assert_eq!(picker.toggle(&free("k-1")).unwrap(), Pick::Selected);
        assert_eq!(picker.toggle(&free("k-2")).unwrap(), Pick::Selected);
        assert!(matches!(
            picker.toggle(&free("k-3")),
            Err(SeatMapError::QuotaExceeded { required: 2 })
        ));
        assert_eq!(picker.toggle(&free("k-1")).unwrap(), Pick::Deselected);
        assert_eq!(picker.toggle(&free("k-3")).unwrap(), Pick::Selected);
        assert_eq!(
            picker.picked(),
            &[ElementId::intern("k-2"), ElementId::intern("k-3")]
        );
    }

    #[test]
    fn taken_seats_are_unavailable() {
        let mut picker = SeatPicker::new(1);
        let mut seat = free("k-4");
        seat.status = SeatStatus::Blocked;
        assert!(matches!(
            picker.toggle(&seat),
            Err(SeatMapError::SeatUnavailable(_))
        ));
        assert_eq!(picker.remaining(), 1);
    }

    #[test]
    fn confirm_requires_exact_count() {
        let mut picker = SeatPicker::new(2);
        picker.toggle(&free("k-5")).unwrap();
        assert!(matches!(
            picker.confirm(),
            Err(SeatMapError::SelectionIncomplete {
                selected: 1,
                required: 2
            })
        ));
        picker.toggle(&free("k-6")).unwrap();
        assert_eq!(picker.confirm().unwrap().len(), 2);
        picker.reset();
        assert!(picker.picked().is_empty());
    }
}
