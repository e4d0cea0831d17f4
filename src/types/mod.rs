mod record;
mod row;

pub use record::Record;
pub use row::Row;
