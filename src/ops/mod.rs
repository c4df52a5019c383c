pub mod clock;
pub mod drawer;
pub mod session;
pub mod todo_ops;
