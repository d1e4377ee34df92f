//! # TUI Components
//!
//! UI pieces for the catalog browser.
//!
//! Components in this directory follow two patterns:
//!
//! ### Stateless Components (Props-Based Rendering)
//!
//! Display components built each frame from borrowed app data:
//! - `TitleBar`: app name, loading spinner, status line and theme indicator
//! - `Sidebar`: category navigator with the search box underneath
//! - `DetailPanel`: label/value table for the selected item
//!
//! ### Stateful Components
//!
//! Components whose state outlives a frame and lives in `TuiState`:
//! - `SearchBox`: text input with cursor, emits `SearchEvent`s
//! - `ResultList`: result cards with a highlight cursor plus the paging row
//!
//! Components receive data as props, never by reaching into `App`. The core
//! decides what is shown; components only decide how.
//!
//! ```text
//! components/
//! ├── mod.rs           (this file)
//! ├── title_bar.rs     (Top status bar)
//! ├── sidebar.rs       (Category buttons + search)
//! ├── search_box.rs    (Search input)
//! ├── result_list.rs   (Cards + pagination)
//! └── detail_panel.rs  (Selected item details)
//! ```

mod detail_panel;
mod result_list;
mod search_box;
mod sidebar;
mod title_bar;

pub use detail_panel::DetailPanel;
pub use result_list::{Paging, ResultList, ResultListState};
pub use search_box::{SearchBox, SearchEvent};
pub use sidebar::Sidebar;
pub use title_bar::TitleBar;
