pub mod config;
pub mod debounce;
pub mod frame;
pub mod navigation;
pub mod parallax;
pub mod preload;
pub mod section;
pub mod stagger;
pub mod style;
pub mod viewport;

pub use config::{ConfigError, PresentationConfig, StaggerProfile};
pub use debounce::Debouncer;
pub use frame::FrameCoalescer;
pub use navigation::{NavPhase, Navigator, Transition};
pub use parallax::{CardTilt, ParallaxOffset};
pub use section::{Section, SectionParseError, ALL_SECTIONS};
pub use stagger::{EntrancePlan, EntranceStep};
pub use viewport::{LayoutUpdate, ViewportState};

pub const REVEAL_SELECTOR: &str = ".cv-card, .timeline-item, .gallery-item, .letter-block";
pub const REVEALED_CLASS: &str = "fade-in";
pub const MENU_OPTION_SELECTOR: &str = ".menu-option";
pub const OVERLAY_SELECTOR: &str = ".section-overlay";
