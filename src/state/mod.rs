pub mod finger;
pub mod settings;
pub mod surface;

pub use settings::Settings;
pub use surface::TouchSurface;
