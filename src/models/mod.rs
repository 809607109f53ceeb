pub mod acknowledgment;
pub mod ledger;

pub use acknowledgment::*;
pub use ledger::*;
