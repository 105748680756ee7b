mod login;
pub use login::Login;

mod register;
pub use register::Register;

mod tab_layout;
pub use tab_layout::TabLayout;

mod records;
pub use records::Records;

mod write;
pub use write::Write;

mod map;
pub use map::Map;

mod my;
pub use my::My;
