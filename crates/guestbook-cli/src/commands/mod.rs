mod check;
mod entries;
mod migrate;
mod seed;
mod serve;

pub use check::handle_check;
pub use entries::{handle_add, handle_list, handle_show};
pub use migrate::handle_migrate;
pub use seed::handle_seed;
pub use serve::handle_serve;
