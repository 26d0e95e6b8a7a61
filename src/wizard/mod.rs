pub mod controller;
pub mod step;

pub use controller::WizardController;
pub use step::WizardStep;
