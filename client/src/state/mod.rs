//! UI controller state for the site.
//!
//! DESIGN
//! ======
//! Each controller is a plain struct with explicit transition methods. Components
//! own one instance inside an `RwSignal` and feed it browser events; the structs
//! themselves never touch the DOM, which keeps every transition unit-testable.

pub mod carousel;
pub mod contact;
pub mod dropdown;
pub mod nav;
pub mod reveal;
