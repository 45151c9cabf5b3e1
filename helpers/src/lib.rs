pub mod general;
pub mod logging;
