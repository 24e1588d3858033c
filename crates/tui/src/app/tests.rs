use psearch_core::{ManualClock, SearchResultId, Service, UserDirectory, UserRecord};
use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::crossterm::event::{
	KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::App;
use crate::SearchPanel;

fn directory() -> UserDirectory {
	UserDirectory::new(vec![
		UserRecord::new("alice", Service::Keybase).with_full_name("Alice Liddell"),
		UserRecord::new("alina", Service::Keybase),
		UserRecord::new("alison", Service::Twitter).with_keybase_username("alice"),
		UserRecord::new("bob", Service::Keybase),
	])
}

fn app() -> (App<ManualClock>, ManualClock) {
	let clock = ManualClock::new();
	let app = SearchPanel::new(directory()).into_app_with_clock(clock.clone());
	(app, clock)
}

fn press(app: &mut App<ManualClock>, code: KeyCode) {
	app.handle_key(KeyEvent::new(code, KeyModifiers::NONE));
}

fn type_text(app: &mut App<ManualClock>, text: &str) {
	for ch in text.chars() {
		press(app, KeyCode::Char(ch));
	}
}

fn advance(app: &mut App<ManualClock>, clock: &ManualClock, millis: u64) {
	clock.advance_ms(millis);
	app.tick();
}

fn click(app: &mut App<ManualClock>, (column, row): (u16, u16)) {
	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::Down(MouseButton::Left),
		column,
		row,
		modifiers: KeyModifiers::NONE,
	});
}

fn search_count(app: &App<ManualClock>) -> usize {
	app.view_model().store().search_count()
}

fn result_ids(app: &App<ManualClock>) -> Vec<SearchResultId> {
	app.view().results.items.into_iter().map(|item| item.id).collect()
}

fn draw(app: &mut App<ManualClock>) -> Terminal<TestBackend> {
	let mut terminal = Terminal::new(TestBackend::new(80, 14)).expect("terminal");
	terminal.draw(|frame| app.draw(frame)).expect("draw");
	terminal
}

fn rows(terminal: &Terminal<TestBackend>) -> Vec<Vec<char>> {
	let buffer = terminal.backend().buffer();
	(0..buffer.area.height)
		.map(|y| {
			(0..buffer.area.width)
				.map(|x| {
					buffer
						.cell((x, y))
						.and_then(|cell| cell.symbol().chars().next())
						.unwrap_or(' ')
				})
				.collect()
		})
		.collect()
}

fn screen(terminal: &Terminal<TestBackend>) -> String {
	rows(terminal)
		.into_iter()
		.map(|row| row.into_iter().collect::<String>())
		.collect::<Vec<_>>()
		.join("\n")
}

fn find(terminal: &Terminal<TestBackend>, needle: &str) -> Option<(u16, u16)> {
	let needle: Vec<char> = needle.chars().collect();
	rows(terminal).iter().enumerate().find_map(|(y, row)| {
		row.windows(needle.len())
			.position(|window| window == needle.as_slice())
			.map(|x| (x as u16, y as u16))
	})
}

#[test]
fn typing_searches_once_after_the_quiet_period() {
	let (mut app, clock) = app();
	type_text(&mut app, "ali");
	app.tick();

	assert_eq!(app.view().input_row.text, "ali");
	assert!(app.view().input_row.searching);
	assert_eq!(search_count(&app), 0);

	advance(&mut app, &clock, 999);
	assert_eq!(search_count(&app), 0);

	advance(&mut app, &clock, 1);
	assert_eq!(search_count(&app), 1);
	assert!(!app.view().input_row.searching);
	let ids = result_ids(&app);
	assert_eq!(ids.len(), 2);
	assert!(ids.contains(&SearchResultId::new("alice")));
	assert_eq!(app.list_state.selected(), Some(0));
}

#[test]
fn tab_switches_service_and_searches_immediately() {
	let (mut app, clock) = app();
	type_text(&mut app, "ali");
	press(&mut app, KeyCode::Tab);

	assert_eq!(app.view_model().query().service, Service::Twitter);
	assert_eq!(search_count(&app), 1);
	assert_eq!(result_ids(&app), vec![SearchResultId::new("alison@twitter")]);

	advance(&mut app, &clock, 1000);
	assert_eq!(search_count(&app), 1);

	press(&mut app, KeyCode::BackTab);
	assert_eq!(app.view_model().query().service, Service::Keybase);
	assert_eq!(search_count(&app), 2);
}

#[test]
fn enter_selects_the_highlighted_result() {
	let (mut app, clock) = app();
	type_text(&mut app, "ali");
	advance(&mut app, &clock, 1000);
	let ids = result_ids(&app);

	press(&mut app, KeyCode::Down);
	assert_eq!(app.list_state.selected(), Some(1));
	press(&mut app, KeyCode::Down);
	assert_eq!(app.list_state.selected(), Some(1));
	press(&mut app, KeyCode::Enter);

	let outcome = app.outcome().expect("panel closed");
	assert!(outcome.accepted);
	assert_eq!(outcome.query, "ali");
	assert_eq!(outcome.selection.map(|entry| entry.id), Some(ids[1].clone()));
	assert_eq!(app.input.text(), "");
	assert!(result_ids(&app).is_empty());
}

#[test]
fn escape_closes_without_a_selection() {
	let (mut app, _clock) = app();
	type_text(&mut app, "bo");
	assert_eq!(app.outcome(), None);

	press(&mut app, KeyCode::Esc);

	let outcome = app.outcome().expect("panel closed");
	assert!(!outcome.accepted);
	assert_eq!(outcome.selection, None);
	assert_eq!(outcome.query, "bo");
	assert_eq!(app.input.text(), "bo");
}

#[test]
fn enter_without_results_does_nothing() {
	let (mut app, _clock) = app();
	press(&mut app, KeyCode::Enter);
	assert_eq!(app.outcome(), None);
}

#[test]
fn draw_renders_the_panel() {
	let (mut app, _clock) = app();
	let terminal = draw(&mut app);
	let screen = screen(&terminal);

	assert!(screen.contains("Search people"), "{screen}");
	assert!(screen.contains("Type someone"), "{screen}");
	assert!(screen.contains("Filter:"), "{screen}");
	for service in Service::ALL {
		assert!(screen.contains(service.label()), "{screen}");
	}
	assert!(screen.contains("Search Keybase users"), "{screen}");
}

#[test]
fn draw_shows_pending_and_empty_states() {
	let (mut app, clock) = app();
	type_text(&mut app, "zzz");
	let screen_pending = screen(&draw(&mut app));
	assert!(screen_pending.contains("searching"), "{screen_pending}");

	advance(&mut app, &clock, 1000);
	let screen_done = screen(&draw(&mut app));
	assert!(!screen_done.contains("searching"), "{screen_done}");
	assert!(screen_done.contains("No results"), "{screen_done}");
}

#[test]
fn clicking_a_chip_selects_its_service() {
	let (mut app, _clock) = app();
	let terminal = draw(&mut app);
	let position = find(&terminal, "Reddit").expect("reddit chip");

	click(&mut app, position);

	assert_eq!(app.view_model().query().service, Service::Reddit);
	assert_eq!(search_count(&app), 1);
}

#[test]
fn clicking_a_result_selects_it() {
	let (mut app, clock) = app();
	type_text(&mut app, "bob");
	advance(&mut app, &clock, 1000);
	let terminal = draw(&mut app);
	let (_, row) = find(&terminal, "bob").expect("input row");
	// The first match is the input row; the result sits further down.
	let result_row = rows(&terminal)
		.iter()
		.enumerate()
		.skip(usize::from(row) + 1)
		.find_map(|(y, line)| {
			line.windows(3)
				.position(|window| window == ['b', 'o', 'b'])
				.map(|x| (x as u16, y as u16))
		})
		.expect("result row");

	click(&mut app, result_row);

	let outcome = app.outcome().expect("panel closed");
	assert!(outcome.accepted);
	assert_eq!(
		outcome.selection.map(|entry| entry.username).as_deref(),
		Some("bob")
	);
}

#[test]
fn clicking_dismiss_closes_the_panel() {
	let (mut app, _clock) = app();
	let terminal = draw(&mut app);
	let position = find(&terminal, "✕").expect("dismiss control");

	click(&mut app, position);

	let outcome = app.outcome().expect("panel closed");
	assert!(!outcome.accepted);
}

#[test]
fn scrolling_over_results_moves_the_selection() {
	let (mut app, clock) = app();
	type_text(&mut app, "ali");
	advance(&mut app, &clock, 1000);
	draw(&mut app);
	let area = app.results_area.expect("results drawn");

	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::ScrollDown,
		column: area.x,
		row: area.y,
		modifiers: KeyModifiers::NONE,
	});
	assert_eq!(app.list_state.selected(), Some(1));

	app.handle_mouse(MouseEvent {
		kind: MouseEventKind::ScrollUp,
		column: area.x,
		row: area.y,
		modifiers: KeyModifiers::NONE,
	});
	assert_eq!(app.list_state.selected(), Some(0));
}

#[test]
fn initial_query_is_searched_on_open() {
	let clock = ManualClock::new();
	let app = SearchPanel::new(directory())
		.with_service(Service::Twitter)
		.with_initial_query("ali")
		.into_app_with_clock(clock);

	assert_eq!(app.input.text(), "ali");
	assert_eq!(search_count(&app), 1);
	assert_eq!(result_ids(&app), vec![SearchResultId::new("alison@twitter")]);
	assert_eq!(app.list_state.selected(), Some(0));
}
