mod session;

pub use session::ForecastSession;
