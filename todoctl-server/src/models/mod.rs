//! Domain models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationError, not panic.

pub mod timestamp;
pub mod title;
pub mod todo;
pub mod validation;

pub use title::TodoTitle;
pub use todo::{NewTodo, TodoChanges};
pub use validation::ValidationError;
