mod order_context;
mod side;

pub use order_context::OrderContext;
pub use side::Side;
