pub mod panic;

pub use panic::handle_panic;
