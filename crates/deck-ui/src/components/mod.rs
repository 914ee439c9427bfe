pub mod nav;
pub mod notice;
pub mod panel;
