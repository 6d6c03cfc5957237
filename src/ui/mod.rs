//! Terminal UI components: page regions, view model, and widgets.

pub mod groups;
pub mod header;
pub mod help_menu;
pub mod layout;
pub mod palette;
pub mod search_bar;
pub mod tag_bar;
pub mod toast;
pub mod view;

pub use groups::{GroupsState, GroupsView};
pub use header::{Header, Status};
pub use help_menu::{HelpBar, HelpMenuWidget};
pub use palette::{color_for, GroupColor};
pub use search_bar::{SearchBar, SearchInput, SearchKeyResult};
pub use tag_bar::TagBar;
pub use toast::{ToastManager, ToastType, ToastWidget};
pub use view::PageView;
