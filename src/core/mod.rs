pub mod carousel;
pub mod constants;
pub mod form;
pub mod nav;
pub mod particles;
pub mod schedule;

pub use carousel::*;
pub use form::*;
pub use nav::*;
pub use particles::*;
pub use schedule::*;
