pub mod bristol;
pub mod record;
pub mod spreadsheet;
