pub mod app;
pub mod debounce;
pub mod device;
pub mod state;
pub mod subscription;
pub mod theme;

// Export coordinators and state
pub use app::{AppState, LayoutCoordinator, ThemeCoordinator};
pub use state::{LayoutState, ThemeState};

// Export core types
pub use debounce::{Debouncer, DEFAULT_DEBOUNCE_WINDOW};
pub use device::{DeviceClass, MOBILE_BREAKPOINT, TABLET_BREAKPOINT};
pub use subscription::{Subscribers, SubscriptionId};
pub use theme::{ThemeChanged, ThemeColors, ThemeMeta, ThemeMode};

// Export color helpers
pub use theme::{adjust_brightness, hex_to_color32, with_alpha};
