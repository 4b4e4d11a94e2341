mod scalar;
pub use scalar::*;

mod obj;
pub use obj::*;

mod node;
pub use node::*;

mod record;
pub use record::*;
