use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

use super::hits::HitMap;
use crate::style::Theme;
use crate::view::FilterRow;

const CHIP_GAP: u16 = 1;

/// Render the filter label and the service chips centred in `area`,
/// recording a hit region per chip.
pub fn render_filter_row(
	frame: &mut Frame,
	area: Rect,
	row: &FilterRow,
	theme: &Theme,
	hits: &mut HitMap,
) {
	if area.width == 0 || area.height == 0 {
		return;
	}

	let label = format!("{} ", row.label);
	let label_width = label.width() as u16;
	let chip_widths: Vec<u16> = row
		.chips
		.iter()
		.map(|chip| chip_text(chip.label).width() as u16)
		.collect();
	let total = total_width(label_width, &chip_widths);

	let mut x = area.x + area.width.saturating_sub(total) / 2;
	let right = area.right();
	let buffer = frame.buffer_mut();

	let label_line = Line::from(Span::styled(label, theme.prompt));
	buffer.set_line(x, area.y, &label_line, right.saturating_sub(x));
	x = x.saturating_add(label_width);

	for (chip, width) in row.chips.iter().zip(chip_widths) {
		if x >= right {
			break;
		}
		let style = if chip.selected {
			theme.chip_selected_style()
		} else {
			theme.chip_style()
		};
		let visible = width.min(right - x);
		let line = Line::from(Span::styled(chip_text(chip.label), style));
		buffer.set_line(x, area.y, &line, visible);
		hits.push(Rect::new(x, area.y, visible, 1), chip.on_select.clone());
		x = x.saturating_add(width).saturating_add(CHIP_GAP);
	}
}

fn chip_text(label: &str) -> String {
	format!(" {label} ")
}

fn total_width(label_width: u16, chip_widths: &[u16]) -> u16 {
	let chips: u16 = chip_widths.iter().sum();
	let gaps = CHIP_GAP.saturating_mul(chip_widths.len().saturating_sub(1) as u16);
	label_width.saturating_add(chips).saturating_add(gaps)
}
