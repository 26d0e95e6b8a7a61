use crate::data::{AppSettings, Persistable, TripHistory, TripSession, persistence::get_data_dir};
use crate::ui::wizard_view::{App, run_app};
use crate::ui::{restore_terminal, setup_terminal};
use anyhow::Result;
use tracing::info;

pub fn run() -> Result<()> {
    let data_dir = get_data_dir()?;
    let settings = AppSettings::load()?;
    let mut session = TripSession::with_history(TripHistory::load()?);

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen
        );
        original_hook(info);
    }));

    let mut terminal = setup_terminal()?;
    info!(trips = session.history.len(), "wizard started");

    let mut app = App::new(&mut session, settings);
    let result = run_app(&mut terminal, &mut app);

    restore_terminal(&mut terminal)?;

    // App borrows the session; take what we need before releasing it.
    let final_settings = app.settings.clone();
    drop(app);

    session.history.save()?;
    final_settings.save_to(&data_dir)?;
    info!(trips = session.history.len(), "wizard closed");

    result
}
