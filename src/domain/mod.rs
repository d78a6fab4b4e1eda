pub mod transaction;
pub mod status;
pub mod badge;
pub mod route;
pub mod transition;

pub use transaction::*;
pub use status::*;
pub use badge::*;
pub use route::*;
pub use transition::*;
