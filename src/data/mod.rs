pub mod app_settings;
pub mod draft_store;
pub mod history;
pub mod persistence;
pub mod session;
pub mod trip;

pub use app_settings::AppSettings;
pub use draft_store::TripDraftStore;
pub use history::{TripHistory, TripHistoryEntry};
pub use persistence::Persistable;
pub use session::TripSession;
pub use trip::{Assistance, DraftUpdate, GuestKind, GuestsUpdate, TripDraft};
