//! Advisory product flows: the skills assessment pipeline and the trend
//! datasets behind the analytics page.

pub mod assessment;
pub mod trends;
