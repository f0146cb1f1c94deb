pub mod coerce;
pub mod date_parser;
