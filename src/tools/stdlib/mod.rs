//! Standard builtins for Lispline

pub mod arithmetic;
pub mod comparison;
pub mod lists;
pub mod system;

use crate::tools::ToolRegistry;

/// Register all standard builtins
pub fn register_all(registry: &mut ToolRegistry) {
    system::register(registry);
    arithmetic::register(registry);
    comparison::register(registry);
    lists::register(registry);
}
