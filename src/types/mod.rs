pub mod order_book;
pub mod price;
pub mod snapshot;
