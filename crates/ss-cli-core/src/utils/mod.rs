//! Output helpers shared by the session driver.

pub mod pretty;
