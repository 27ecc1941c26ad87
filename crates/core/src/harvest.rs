//! Scanner harvesting: collect the scanners the resolved modules declare.

use bootlace_api::{Module, Scanner};
use std::sync::Arc;

/// Concatenate the scanners of `modules`, preserving module order and each
/// module's own declaration order. Modules without scanners contribute
/// nothing. Read-only: handles are cloned, the modules stay untouched.
pub fn harvest(modules: &[Arc<Module>]) -> Vec<Arc<dyn Scanner>> {
    let mut scanners: Vec<Arc<dyn Scanner>> = Vec::new();
    for module in modules {
        scanners.extend(module.scanners().iter().cloned());
    }
    scanners
}
