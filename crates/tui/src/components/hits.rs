use ratatui::layout::{Position, Rect};

use crate::view::UiAction;

/// Screen regions recorded during the last draw, each mapped to the action a
/// click there triggers.
#[derive(Debug, Default, Clone)]
pub struct HitMap {
	regions: Vec<(Rect, UiAction)>,
}

impl HitMap {
	pub fn clear(&mut self) {
		self.regions.clear();
	}

	pub fn push(&mut self, area: Rect, action: UiAction) {
		if area.width > 0 && area.height > 0 {
			self.regions.push((area, action));
		}
	}

	/// The action under `(column, row)`. Later regions win on overlap.
	#[must_use]
	pub fn action_at(&self, column: u16, row: u16) -> Option<&UiAction> {
		let position = Position::new(column, row);
		self.regions
			.iter()
			.rev()
			.find(|(area, _)| area.contains(position))
			.map(|(_, action)| action)
	}

	#[must_use]
	pub fn len(&self) -> usize {
		self.regions.len()
	}

	#[must_use]
	pub fn is_empty(&self) -> bool {
		self.regions.is_empty()
	}
}
