pub mod content;
pub mod domain;
pub mod error;
pub mod events;
pub mod logging;
pub mod navigation;
pub mod section;
pub mod state;
pub mod theme;
pub mod traits;

// Export core navigation types
pub use navigation::NavigationController;
pub use section::Section;
pub use traits::{ScrollBehavior, SectionBounds, SectionRegistry};
pub use events::{ScrollEvent, ScrollHub, ScrollSubscription};

// Export errors
pub use error::{Error, LookupError, Result};

// Export theme support
pub use theme::{Theme, ThemeColors, theme_colors, hex_to_color32, adjust_brightness, with_alpha};

// Export content configuration
pub use content::{ContactInfo, PortfolioContent, Project};
