pub mod owner;
pub mod panic_hook;
