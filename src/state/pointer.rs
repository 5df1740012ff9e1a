// Active contacts for one layer, kept in insertion order.
use crate::model::{ContactId, ContactPoint, Point};

#[derive(Default, Debug, Clone)]
pub struct PointerTracker {
    contacts: Vec<ContactPoint>,
}

impl PointerTracker {
    /// Registers a contact. A repeated start for a known id only moves it.
    pub fn begin(&mut self, id: ContactId, at: Point) {
        match self.contacts.iter_mut().find(|c| c.id == id) {
            Some(c) => {
                c.x = at.x;
                c.y = at.y;
            }
            None => self.contacts.push(ContactPoint {
                id,
                x: at.x,
                y: at.y,
            }),
        }
    }

    /// Records the new position and returns the displacement since the last
    /// one, or `None` for an id that is not tracked.
    pub fn move_to(&mut self, id: ContactId, at: Point) -> Option<(f64, f64)> {
        let c = self.contacts.iter_mut().find(|c| c.id == id)?;
        let delta = (at.x - c.x, at.y - c.y);
        c.x = at.x;
        c.y = at.y;
        Some(delta)
    }

    /// Returns whether the id was tracked.
    pub fn end(&mut self, id: ContactId) -> bool {
        let before = self.contacts.len();
        self.contacts.retain(|c| c.id != id);
        self.contacts.len() != before
    }

    #[cfg(test)]
    pub fn contains(&self, id: ContactId) -> bool {
        self.contacts.iter().any(|c| c.id == id)
    }

    pub fn active_count(&self) -> usize {
        self.contacts.len()
    }

    pub fn active_points(&self) -> &[ContactPoint] {
        &self.contacts
    }

    /// The two oldest contacts; any further contacts are ignored.
    pub fn first_pair(&self) -> Option<(Point, Point)> {
        match self.contacts.as_slice() {
            [a, b, ..] => Some((a.point(), b.point())),
            _ => None,
        }
    }
}
