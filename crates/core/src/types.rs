/// All database primary keys are 64-bit integer rowids.
pub type DbId = i64;
