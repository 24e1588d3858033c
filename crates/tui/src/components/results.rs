use ratatui::Frame;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, HighlightSpacing, List, ListItem, ListState, Paragraph};

use super::hits::HitMap;
use crate::style::Theme;
use crate::view::ResultsList;

const HIGHLIGHT_SYMBOL: &str = "▶ ";

/// Render the results list, or its message when empty.
///
/// Returns the inner area rows are drawn in, which the app uses to map mouse
/// scrolling onto the list.
pub fn render_results(
	frame: &mut Frame,
	area: Rect,
	list: &ResultsList,
	state: &mut ListState,
	theme: &Theme,
	hits: &mut HitMap,
) -> Rect {
	let block = Block::default()
		.borders(Borders::TOP)
		.border_style(theme.border_style());
	let inner = block.inner(area);
	frame.render_widget(block, area);

	if list.items.is_empty() {
		if let Some(message) = &list.message {
			let paragraph = Paragraph::new(message.as_str())
				.alignment(Alignment::Center)
				.style(theme.muted_style());
			frame.render_widget(paragraph, inner);
		}
		return inner;
	}

	let items: Vec<ListItem> = list
		.items
		.iter()
		.map(|item| {
			let mut spans = vec![Span::styled(item.primary.clone(), theme.username_style())];
			if let Some(secondary) = &item.secondary {
				spans.push(Span::raw("  "));
				spans.push(Span::styled(secondary.clone(), theme.muted_style()));
			}
			ListItem::new(Line::from(spans))
		})
		.collect();

	let widget = List::new(items)
		.highlight_style(theme.row_highlight)
		.highlight_symbol(HIGHLIGHT_SYMBOL)
		.highlight_spacing(HighlightSpacing::Always);
	frame.render_stateful_widget(widget, inner, state);

	let offset = state.offset();
	let visible = usize::from(inner.height);
	for (row, item) in list.items.iter().enumerate().skip(offset).take(visible) {
		let y = inner.y + (row - offset) as u16;
		hits.push(Rect::new(inner.x, y, inner.width, 1), item.on_click.clone());
	}

	inner
}
