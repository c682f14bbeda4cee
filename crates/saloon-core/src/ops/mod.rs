pub mod guard;
pub mod saloon_ops;
pub mod service_ops;
pub mod store;

pub use guard::ensure_owner;
pub use store::{RecordStore, Store};
