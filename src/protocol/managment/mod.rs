//! Network management logic: address claiming, device registry, and NAME
//! field manipulation.
pub mod device_registry;
pub mod group_function;
pub mod iso_name;
