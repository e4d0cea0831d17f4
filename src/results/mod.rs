mod any;
mod array;
mod db;
mod text;

pub use any::AnyResult;
pub use array::ArrayResult;
pub use db::DbResult;
pub use text::TextResult;
