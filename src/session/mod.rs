mod key;
mod report;
mod session;

use key::*;

pub use report::*;
pub use session::*;
