//! State Layer
//!
//! Headless state behind the select components. Views own these values and
//! follow a unidirectional flow:
//!
//! ```text
//! UI Event → State Transition → report to caller → notify → UI Refresh
//! ```

mod highlight;
mod multi_select;
mod scroll;
mod search;
mod single_select;

pub use highlight::*;
pub use multi_select::*;
pub use scroll::*;
pub use search::*;
pub use single_select::*;
