pub mod intent;
pub mod nav_map;
pub mod scroll_spy;
pub mod scroll_state;

pub use intent::{
    classify_click, history_url, initial_action, section_url, ClickAction, InitialAction,
};
pub use nav_map::{NavLink, NavigationMap, HOME_KEY};
pub use scroll_spy::{header_scrolled, ActiveSection, ScrollSpy, SectionBox};
pub use scroll_state::ScrollState;
