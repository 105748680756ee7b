mod tab_layout;
pub use tab_layout::{Tab, TabLayoutView};

mod records;
pub use records::RecordsView;

mod write;
pub use write::WriteView;

mod map;
pub use map::MapView;

mod my;
pub use my::MyView;
