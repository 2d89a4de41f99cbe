pub mod holidays;
pub mod weather;

pub use holidays::HolidayService;
pub use weather::{rain_alert, WeatherService};
