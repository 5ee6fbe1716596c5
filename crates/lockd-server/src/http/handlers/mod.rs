mod delete_lock;
mod get_holder;
mod get_holders;
mod get_lock;
mod get_locks;
mod patch_lock;
mod put_lock;

pub use delete_lock::delete_lock;
pub use get_holder::get_holder;
pub use get_holders::get_holders;
pub use get_lock::get_lock;
pub use get_locks::get_locks;
pub use patch_lock::patch_lock;
pub use put_lock::put_lock;
