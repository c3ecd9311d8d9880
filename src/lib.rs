pub mod aggregate;
pub mod dates;
pub mod fetch;
pub mod output;
pub mod parser;
pub mod pipeline;
pub mod records;
