pub mod categories;
pub mod projects;
pub mod submissions;
pub mod users;

mod timestamp;

pub use timestamp::make_timestamp;
